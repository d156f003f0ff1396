// Job-description analysis: the rule-based section structurer and its
// HTTP surface. Scoring against a CV is a later phase; nothing here
// depends on candidate data.

pub mod handlers;
pub mod structurer;
