use super::catalog::ActivityCatalog;
use super::entry::ActivityRow;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Rows of one day as they would be submitted.
    pub fn rows(rows: &[ActivityRow], catalog: &ActivityCatalog) {
        let mut table = Table::new();

        table.add_row(row!["ISSUE", "ACTIVITY", "DESCRIPTION", "HOURS", "TAGS", "REDMINE ACTIVITY"]);
        for item in rows {
            table.add_row(row![
                item.issue_id().map(|id| format!("#{}", id)).unwrap_or_else(|| "-".to_string()),
                item.activity.as_deref().unwrap_or(""),
                item.description.as_deref().unwrap_or(""),
                format!("{:.2}", item.hours),
                item.tags,
                catalog.resolve(&item.tags).name
            ]);
        }
        table.printstd();
    }

    pub fn activities(catalog: &ActivityCatalog) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEFAULT"]);
        for activity in catalog.iter() {
            let is_default = activity.id == catalog.default_activity().id;
            table.add_row(row![activity.id, activity.name, if is_default { "*" } else { "" }]);
        }
        table.printstd();
    }
}
