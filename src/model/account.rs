/// The signed-in user. Nothing outlives the process.
#[derive(Clone, Debug)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub headline: String,
}

impl Account {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            headline: "Software Developer".to_string(),
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Up to two initials for avatar badges, e.g. "Jane Smith" -> "JS".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
