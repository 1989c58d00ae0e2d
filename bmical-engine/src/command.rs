/// A user-editable input field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Height => "Height",
            Field::Weight => "Weight",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Height => "cm",
            Field::Weight => "kg",
        }
    }
}

/// The closed set of messages the engine reacts to. Front-ends translate
/// their native events into these and dispatch them synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Submit,
    FieldChanged(Field),
    Reset,
}
