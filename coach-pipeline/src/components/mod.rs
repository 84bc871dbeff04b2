pub mod closing_scorer;
pub mod empathy_scorer;
pub mod greeting_scorer;
pub mod problem_scorer;
pub mod solution_scorer;
