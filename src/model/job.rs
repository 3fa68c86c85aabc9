#[derive(Clone, Debug)]
pub struct JobPosting {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub applied: bool,
}
