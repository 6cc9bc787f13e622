/**
 * Small helpers to assemble WHERE clauses from optional
 * filters. Only the placeholders are generated here,
 * never any client-provided text.
 */

pub fn field_equals_placeholder(name: &str) -> String {
  format!("{} = ?", name)
}

// Gives back an empty string when there are no clauses
// so the caller can just glue it into the query.
pub fn where_and_clause(clauses: &[String]) -> String {
  if clauses.is_empty() {
    String::new()
  } else {
    format!("WHERE {} ", clauses.join(" AND "))
  }
}
