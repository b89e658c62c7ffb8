//! Match-by-example search criteria for launches

use rust_decimal::Decimal;

use super::model::{Launch, LaunchStatus, LaunchType};

/// Search criteria where every set field must equal the launch's field.
/// Unset fields are not filtered on, so the default filter matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFilter {
    pub description: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub user_id: Option<i64>,
    pub value: Option<Decimal>,
    pub launch_type: Option<LaunchType>,
    pub status: Option<LaunchStatus>,
}

impl LaunchFilter {
    pub fn matches(&self, launch: &Launch) -> bool {
        field_matches(&self.description, &launch.description)
            && field_matches(&self.month, &launch.month)
            && field_matches(&self.year, &launch.year)
            && field_matches(&self.user_id, &launch.user_id)
            && field_matches(&self.value, &launch.value)
            && field_matches(&self.launch_type, &launch.launch_type)
            && field_matches(&self.status, &launch.status)
    }
}

fn field_matches<T: PartialEq>(wanted: &Option<T>, actual: &Option<T>) -> bool {
    match wanted {
        Some(w) => actual.as_ref() == Some(w),
        None => true,
    }
}

/// Build criteria from a partially filled template launch. The id and the
/// registration date are never used as criteria.
impl From<&Launch> for LaunchFilter {
    fn from(template: &Launch) -> Self {
        Self {
            description: template.description.clone(),
            month: template.month,
            year: template.year,
            user_id: template.user_id,
            value: template.value,
            launch_type: template.launch_type,
            status: template.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(year: i32, launch_type: LaunchType) -> Launch {
        Launch::new("Groceries", 4, year, 1, Decimal::from(30), launch_type)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = LaunchFilter::default();
        assert!(filter.matches(&launch(2022, LaunchType::Expense)));
        assert!(filter.matches(&Launch::default()));
    }

    #[test]
    fn set_fields_must_match_exactly() {
        let filter = LaunchFilter {
            year: Some(2022),
            launch_type: Some(LaunchType::Income),
            ..LaunchFilter::default()
        };
        assert!(filter.matches(&launch(2022, LaunchType::Income)));
        assert!(!filter.matches(&launch(2022, LaunchType::Expense)));
        assert!(!filter.matches(&launch(2021, LaunchType::Income)));
    }

    #[test]
    fn set_field_does_not_match_missing_value() {
        let filter = LaunchFilter {
            status: Some(LaunchStatus::Pending),
            ..LaunchFilter::default()
        };
        assert!(!filter.matches(&launch(2022, LaunchType::Income)));
    }

    #[test]
    fn description_is_compared_exactly() {
        let filter = LaunchFilter {
            description: Some("groceries".into()),
            ..LaunchFilter::default()
        };
        assert!(!filter.matches(&launch(2022, LaunchType::Expense)));
        let filter = LaunchFilter {
            description: Some("Groceries".into()),
            ..LaunchFilter::default()
        };
        assert!(filter.matches(&launch(2022, LaunchType::Expense)));
    }

    #[test]
    fn template_ignores_id_and_registration_date() {
        let mut template = Launch {
            year: Some(2022),
            ..Launch::default()
        };
        template.id = Some(99);
        template.registered_on = chrono::NaiveDate::from_ymd_opt(2020, 1, 1);

        let filter = LaunchFilter::from(&template);
        assert_eq!(
            filter,
            LaunchFilter {
                year: Some(2022),
                ..LaunchFilter::default()
            }
        );
        assert!(filter.matches(&launch(2022, LaunchType::Expense)));
    }
}
