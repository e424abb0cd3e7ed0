//! Options command implementation

use anyhow::Result;

use article_params::SettingsField;

/// Print the option lists, or only the one for `field`
pub fn options_command(field: Option<SettingsField>) -> Result<()> {
    let fields: Vec<SettingsField> = match field {
        Some(field) => vec![field],
        None => SettingsField::ALL.to_vec(),
    };

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_field_options(*field));
    }

    Ok(())
}

fn format_field_options(field: SettingsField) -> String {
    let mut out = format!("{} ({}):\n", field, field.css_property());
    for (i, option) in field.options().iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        out.push_str(&format!("  {:<20} {}{}\n", option.label, option.value, marker));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_marks_first_entry_as_default() {
        let text = format_field_options(SettingsField::FontSize);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "font-size (--font-size):");
        assert!(lines[1].ends_with("18px (default)"));
        assert!(lines[2].ends_with("25px"));
        assert_eq!(lines.len(), 4);
    }
}
