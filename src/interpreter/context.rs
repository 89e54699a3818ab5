use std::collections::HashMap;

/// Named constants every session starts with.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", 3.14159),
                                        ("e", 2.71828),
                                        ("abszero", -273.15),
                                        ("k", 1000.0),
                                        ("itoc", 2.54),
                                        ("ftom", 0.3048),
                                        ("days", 365.25),
                                        ("hours", 24.0),
                                        ("minutes", 60.0),
                                        ("seconds", 60.0),
                                        ("months", 12.0),
                                        ("golden", 1.618_033_988_7),
                                        ("light", 299_792_458.0)];

/// Stores the runtime evaluation context.
///
/// This struct holds the calculator state: a mapping from variable names to
/// their current values. It is created once, pre-seeded with [`CONSTANTS`],
/// and reused for every statement of a session. Only the assignment
/// production mutates it; nothing ever removes an entry.
///
/// # Example
/// ```
/// use deskcalc::interpreter::context::Context;
///
/// let mut context = Context::new();
///
/// assert_eq!(context.value_of("pi"), 3.14159);
///
/// context.assign("x", 5.0);
/// assert_eq!(context.value_of("x"), 5.0);
/// ```
pub struct Context {
    variables: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context seeded with the named constants.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: CONSTANTS.iter()
                                   .map(|&(name, value)| (name.to_owned(), value))
                                   .collect(), }
    }

    /// Returns the current value of a variable.
    ///
    /// Reading a name that was never assigned inserts it with `0.0` and
    /// returns that. Intentional quirk, kept for compatibility with the
    /// observable behavior of map-indexing reads; an unbound read is not an
    /// error.
    pub fn value_of(&mut self, name: &str) -> f64 {
        *self.variables.entry(name.to_owned()).or_insert(0.0)
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }
}
