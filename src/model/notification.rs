#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub actor: String,
    pub action: String,
    pub age: String,
    pub read: bool,
}
