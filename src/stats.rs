use crate::types::requisition::{Requisition, Status};

/// Order counts shown on the dashboard's stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl OrderStats {
    /// Tally the cached requisition list by status
    pub fn from_requisitions(requisitions: &[Requisition]) -> Self {
        let mut stats = Self {
            total: requisitions.len(),
            ..Self::default()
        };
        for req in requisitions {
            match req.status {
                Status::Pending => stats.pending += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Completed => stats.completed += 1,
                Status::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::requisition_named;

    #[test]
    fn counts_every_status_bucket() {
        let mut reqs = vec![
            requisition_named("a", "Ada"),
            requisition_named("b", "Bisi"),
            requisition_named("c", "Chidi"),
            requisition_named("d", "Dayo"),
        ];
        reqs[1].status = Status::InProgress;
        reqs[2].status = Status::Completed;
        reqs[3].status = Status::Cancelled;

        let stats = OrderStats::from_requisitions(&reqs);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 1);
    }

    #[test]
    fn empty_list_is_all_zeroes() {
        assert_eq!(OrderStats::from_requisitions(&[]), OrderStats::default());
    }
}
