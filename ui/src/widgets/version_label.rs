use egui::{Response, Ui};
use sedir_utils::version_info;

/// Displays `v{version}+{commit}` in the top bar.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.weak(format!("v{}", version_info::format_version()))
        .on_hover_text(format!("Built {}", version_info::build_day()))
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn shows_version_and_commit() {
        let mut harness = Harness::new_ui(|ui| {
            super::version_label(ui);
        });
        harness.step();

        let expected = format!("v{}", sedir_utils::version_info::format_version());
        assert!(
            harness.query_by_label(&expected).is_some(),
            "version label should read {expected}"
        );
    }
}
