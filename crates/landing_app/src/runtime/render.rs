use landing_core::PageViewModel;
use page_logging::page_info;

/// Logs a textual frame of the view model, the headless stand-in for
/// applying class and attribute changes to the page.
pub fn render(view: &PageViewModel) {
    for line in frame(view) {
        page_info!("{}", line);
    }
}

fn frame(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "menu open={} | modal shown={} src={:?} | scroll_locked={}",
        view.menu.open, view.modal.shown, view.modal.image_src, view.body_scroll_locked
    ));

    let open_panel = view
        .accordion
        .iter()
        .find(|row| row.open)
        .map(|row| row.index);
    lines.push(format!(
        "accordion open={:?} | program choices mounted={} shown={} | inquiry choices mounted={} shown={}",
        open_panel,
        view.program_selector.mounted,
        view.program_selector.shown,
        view.inquiry_buttons.mounted,
        view.inquiry_buttons.shown
    ));

    for row in &view.forms {
        if !row.mounted && row.notice.is_none() {
            continue;
        }
        lines.push(match &row.notice {
            Some(notice) => format!("#{}: {}", row.element_id, notice),
            None => format!(
                "#{}: shown={} submit[{}] enabled={}",
                row.element_id, row.shown, row.submit_label, row.submit_enabled
            ),
        });
    }
    lines
}
