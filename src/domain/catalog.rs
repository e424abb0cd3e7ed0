//! Fixed option lists for every article setting
//!
//! The first entry of each list is the default. Lists are never empty.

use super::DisplayOption;

pub static FONT_FAMILY_OPTIONS: &[DisplayOption] = &[
    DisplayOption::with_class("Open Sans", "Open Sans", "open-sans"),
    DisplayOption::with_class("Ubuntu", "Ubuntu", "ubuntu"),
    DisplayOption::with_class("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    DisplayOption::with_class("Days One", "Days One", "days-one"),
    DisplayOption::with_class("Merriweather", "Merriweather", "merriweather"),
];

pub static FONT_SIZE_OPTIONS: &[DisplayOption] = &[
    DisplayOption::new("18px", "18px"),
    DisplayOption::new("25px", "25px"),
    DisplayOption::new("38px", "38px"),
];

pub static FONT_COLOR_OPTIONS: &[DisplayOption] = &[
    DisplayOption::new("Black", "#000000"),
    DisplayOption::new("White", "#FFFFFF"),
    DisplayOption::new("Gray", "#C4C4C4"),
    DisplayOption::new("Pink", "#FEAFE8"),
    DisplayOption::new("Hot pink", "#FD24AF"),
    DisplayOption::new("Yellow", "#FFC802"),
    DisplayOption::new("Green", "#80D994"),
    DisplayOption::new("Light blue", "#6FC1FD"),
    DisplayOption::new("Purple", "#5F00C7"),
];

pub static BACKGROUND_COLOR_OPTIONS: &[DisplayOption] = &[
    DisplayOption::new("White", "#FFFFFF"),
    DisplayOption::new("Black", "#000000"),
    DisplayOption::new("Gray", "#C4C4C4"),
    DisplayOption::new("Pink", "#FEAFE8"),
    DisplayOption::new("Hot pink", "#FD24AF"),
    DisplayOption::new("Yellow", "#FFC802"),
    DisplayOption::new("Green", "#80D994"),
    DisplayOption::new("Light blue", "#6FC1FD"),
    DisplayOption::new("Purple", "#5F00C7"),
];

pub static CONTENT_WIDTH_OPTIONS: &[DisplayOption] = &[
    DisplayOption::new("Narrow", "800px"),
    DisplayOption::new("Medium", "1000px"),
    DisplayOption::new("Wide", "1200px"),
    DisplayOption::new("Full", "1394px"),
];

/// Find the option whose value matches exactly
pub fn find(options: &'static [DisplayOption], value: &str) -> Option<&'static DisplayOption> {
    options.iter().find(|option| option.value == value)
}

/// Find the option for `value`, falling back to the first entry for stale values
pub fn lookup_or_first(options: &'static [DisplayOption], value: &str) -> &'static DisplayOption {
    find(options, value).unwrap_or(&options[0])
}
