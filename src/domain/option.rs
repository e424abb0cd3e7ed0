/// One selectable choice in a fixed option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOption {
    /// Text shown to the user
    pub label: &'static str,
    /// CSS value, also used as the identity key
    pub value: &'static str,
    /// Face class for font family options, also the stem of the face's font file
    pub class_name: Option<&'static str>,
}

impl DisplayOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: None,
        }
    }

    pub const fn with_class(label: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: Some(class_name),
        }
    }
}
