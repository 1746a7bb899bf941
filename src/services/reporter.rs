use std::fmt;

use chrono::SecondsFormat;

use crate::domain::MemberAssignment;

impl fmt::Display for MemberAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} [Assigned: {}]",
            self.member.name.as_ref(),
            self.member.role,
            self.project.name.as_ref(),
            self.assigned_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// One line per assignment, in the order the store returned them.
pub fn report_lines(assignments: &[MemberAssignment]) -> Vec<String> {
    assignments.iter().map(ToString::to_string).collect()
}
