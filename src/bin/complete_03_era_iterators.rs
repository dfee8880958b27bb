// Complete Era-by-Era Iteration Tour
// The same list walked every way the language has grown to allow, plus the
// small expression and value-type features that arrived alongside

use colored::Colorize;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Milestone 1: Ordered collection (insertion order never matters)
// =============================================================================

/// Collapses duplicates and yields the names in lexicographic order, whatever
/// order they were supplied in.
pub fn sorted_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
    set.into_iter().collect()
}

// =============================================================================
// Milestone 2: Three generations of iteration
// =============================================================================

/// Explicit iterator driving, the way early code spelled it out.
pub fn visit_with_next(names: &[String]) -> Vec<String> {
    let mut visited = Vec::new();
    let mut iter = names.iter();
    while let Some(name) = iter.next() {
        visited.push(name.clone());
    }
    visited
}

/// The for loop sugar over the same iterator.
pub fn visit_with_for(names: &[String]) -> Vec<String> {
    let mut visited = Vec::new();
    for name in names {
        visited.push(name.clone());
    }
    visited
}

/// Closure-based traversal.
pub fn visit_with_for_each(names: &[String]) -> Vec<String> {
    let mut visited = Vec::new();
    names.iter().for_each(|name| visited.push(name.clone()));
    visited
}

// =============================================================================
// Milestone 3: Pipelines and fallbacks
// =============================================================================

pub fn evens(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn squares(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|n| n * n).collect()
}

/// The optional-with-fallback idiom.
pub fn or_default_label(value: Option<&str>) -> String {
    value.unwrap_or("Default value").to_string()
}

pub fn render_numbers(numbers: &[i32]) -> String {
    numbers.iter().join(", ")
}

// =============================================================================
// Milestone 4: Match expressions with multi-pattern arms
// =============================================================================

pub fn letters_in(day: &str) -> usize {
    match day {
        "MONDAY" | "FRIDAY" | "SUNDAY" => 6,
        "TUESDAY" => 7,
        "THURSDAY" | "SATURDAY" => 8,
        other => other.len(),
    }
}

// =============================================================================
// Milestone 5: Value records
// =============================================================================

/// An immutable pair with value equality and a textual form of `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// Main Function - Demonstrates every milestone
// =============================================================================

fn main() {
    println!("{}", "=== Era-by-Era Iteration Tour ===".bold());

    println!("\n--- Milestone 1: Ordered names ---");
    println!("Names in order:");
    for name in sorted_names(["Charlie", "Bob", "Alice"]) {
        println!("{}", name);
    }

    let names: Vec<String> = ["Alice", "Bob", "Charlie"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    println!("\n--- Milestone 2: Iteration styles ---");
    println!("Explicit next():");
    for name in visit_with_next(&names) {
        println!("{}", name);
    }
    println!("\nFor loop:");
    for name in visit_with_for(&names) {
        println!("{}", name);
    }
    println!("\nfor_each closure:");
    visit_with_for_each(&names)
        .iter()
        .for_each(|name| println!("{}", name));

    println!("\n--- Milestone 3: Pipelines ---");
    let numbers = [1, 2, 3, 4, 5];
    println!("Numbers: {}", render_numbers(&numbers));
    println!("Squares: {}", render_numbers(&squares(&numbers)));
    println!("Evens:   {}", render_numbers(&evens(&numbers)));
    println!("Fallback: {}", or_default_label(None));

    println!("\n--- Milestone 4: Match expression ---");
    let day = "MONDAY";
    println!("Number of letters in {}: {}", day, letters_in(day));

    println!("\n--- Milestone 5: Records and multi-line literals ---");
    let point = Point::new(10, 20);
    println!("Point: {}", point);

    let html = r#"
<html>
    <body>
        <p>Hello, world!</p>
    </body>
</html>
"#;
    println!("{}", html);

    println!("{}", "=== Done ===".green());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sorted_names_ignores_insertion_order() {
        let sorted = sorted_names(["Charlie", "Bob", "Alice"]);
        assert_eq!(sorted, vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(sorted, sorted_names(["Alice", "Charlie", "Bob"]));
    }

    #[test]
    fn test_sorted_names_collapses_duplicates() {
        assert_eq!(sorted_names(["Bob", "Bob", "Alice"]), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_iteration_styles_agree() {
        let names: Vec<String> = ["Alice", "Bob", "Charlie"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let by_next = visit_with_next(&names);
        let by_for = visit_with_for(&names);
        let by_for_each = visit_with_for_each(&names);

        assert_eq!(by_next, names);
        assert_eq!(by_for, by_next);
        assert_eq!(by_for_each, by_next);
    }

    #[test]
    fn test_evens_pipeline() {
        assert_eq!(evens(&[1, 2, 3, 4, 5]), vec![2, 4]);
        assert_eq!(evens(&[1, 3, 5]), Vec::<i32>::new());
    }

    #[test]
    fn test_squares_pipeline() {
        assert_eq!(squares(&[1, 2, 3, 4, 5]), vec![1, 4, 9, 16, 25]);
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(or_default_label(None), "Default value");
        assert_eq!(or_default_label(Some("present")), "present");
    }

    #[test]
    fn test_render_numbers_joins_with_commas() {
        assert_eq!(render_numbers(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(render_numbers(&[]), "");
    }

    #[test]
    fn test_letters_in_known_days() {
        assert_eq!(letters_in("MONDAY"), 6);
        assert_eq!(letters_in("FRIDAY"), 6);
        assert_eq!(letters_in("SUNDAY"), 6);
        assert_eq!(letters_in("TUESDAY"), 7);
        assert_eq!(letters_in("THURSDAY"), 8);
        assert_eq!(letters_in("SATURDAY"), 8);
    }

    #[test]
    fn test_letters_in_falls_back_to_length() {
        assert_eq!(letters_in("WEDNESDAY"), 9);
        assert_eq!(letters_in(""), 0);
    }

    #[test]
    fn test_point_renders_as_pair() {
        assert_eq!(Point::new(10, 20).to_string(), "(10, 20)");
        assert_eq!(Point::new(-1, 0).to_string(), "(-1, 0)");
    }

    #[test]
    fn test_point_value_equality() {
        assert_eq!(Point::new(10, 20), Point::new(10, 20));
        assert_ne!(Point::new(10, 20), Point::new(20, 10));
    }

    #[test]
    fn test_point_usable_as_set_element() {
        let set: HashSet<Point> = [Point::new(1, 2), Point::new(1, 2), Point::new(3, 4)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
