use uuid::Uuid;

/// Identifies entities that carry a stable, globally unique identifier.
pub trait Identifiable {
    fn guid(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for listings or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
