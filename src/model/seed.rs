use super::member::{Member, Role};
use super::task::Task;

/// The roster loaded at startup
pub fn seed_members() -> Vec<Member> {
    vec![
        Member::new(1, "Alex Rivera", Role::Leader, true),
        Member::new(2, "Casey Kim", Role::Member, true),
        Member::new(3, "Jordan Lee", Role::Member, false),
        Member::new(4, "Sam Cohen", Role::Guest, true),
        Member::new(5, "Taylor Brooks", Role::Guest, false),
    ]
}

/// The task list loaded at startup
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(101, "Set up GitHub org", false, 1),
        Task::new(102, "Prepare onboarding doc", true, 2),
        Task::new(103, "Design club logo", false, 2),
        Task::new(104, "Schedule kickoff meeting", false, 1),
        Task::new(105, "Create feedback Google Form", false, 4),
    ]
}
