#[derive(Clone, Debug)]
pub struct Connection {
    pub id: u64,
    pub name: String,
    pub headline: String,
    pub connected: bool,
}
