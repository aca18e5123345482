use super::*;

#[test]
fn status_badge_class_covers_all_statuses() {
    assert_eq!(status_badge_class(RequestStatus::Pending), "badge badge-pending");
    assert_eq!(status_badge_class(RequestStatus::Approved), "badge badge-approved");
    assert_eq!(status_badge_class(RequestStatus::Rejected), "badge badge-rejected");
}
