use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;

use crate::config::SiteConfig;

/// Whole years since the company was founded. The year only counts once
/// the founding month has been reached.
pub fn years_in_business(founded_year: i32, founded_month: u32, today: NaiveDate) -> i32 {
    let years = today.year() - founded_year;
    if today.month() < founded_month {
        years - 1
    } else {
        years
    }
}

/// Inline label with the current number of years in business.
#[function_component(YearsInBusiness)]
pub fn years_label() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let today = Local::now().date_naive();
    let years = years_in_business(config.founded_year, config.founded_month, today);

    html! {
        <span class="calc-year">{ years }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_from_founding_month() {
        assert_eq!(years_in_business(1991, 2, date(2026, 1, 31)), 34);
        assert_eq!(years_in_business(1991, 2, date(2026, 2, 1)), 35);
        assert_eq!(years_in_business(1991, 2, date(2026, 10, 19)), 35);
    }

    #[test]
    fn founding_year_itself() {
        assert_eq!(years_in_business(1991, 2, date(1991, 1, 15)), -1);
        assert_eq!(years_in_business(1991, 2, date(1991, 2, 1)), 0);
    }
}
