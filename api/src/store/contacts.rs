use arcade_shared::ContactSubmission;
use tokio::sync::RwLock;

/// Append-only log of contact form submissions
pub struct ContactLog {
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self {
            submissions: RwLock::new(Vec::new()),
        }
    }

    pub async fn list(&self) -> Vec<ContactSubmission> {
        self.submissions.read().await.clone()
    }

    pub async fn append(&self, submission: ContactSubmission) -> ContactSubmission {
        self.submissions.write().await.push(submission.clone());
        submission
    }
}

impl Default for ContactLog {
    fn default() -> Self {
        Self::new()
    }
}
