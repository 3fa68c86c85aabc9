// Jobs state - listings and the applied marker

use crate::model::JobPosting;

pub struct JobsState {
    pub jobs: Vec<JobPosting>,
}

impl JobsState {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// Mark a job applied. Applying twice stays applied.
    pub fn apply(&mut self, id: u64) {
        if let Some(job) = self.jobs.iter_mut().find(|j| j.id == id) {
            job.applied = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JobsState {
        JobsState::new(vec![JobPosting {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "Tech Co".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: "$100k - $150k".to_string(),
            applied: false,
        }])
    }

    #[test]
    fn apply_marks_job() {
        let mut jobs = sample();
        jobs.apply(1);
        assert!(jobs.jobs[0].applied);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut jobs = sample();
        jobs.apply(1);
        jobs.apply(1);
        assert!(jobs.jobs[0].applied);
    }
}
