// Complete Sealed Shape Hierarchy
// A closed set of geometric variants with exhaustive area dispatch

use colored::Colorize;
use std::f64::consts::PI;
use std::fmt;

// =============================================================================
// Milestone 1: Closed variant set as an enum with payload
// =============================================================================

/// A closed family of shapes. Adding a variant here breaks every exhaustive
/// `match` over `Shape`, so the compiler enforces that all dispatch sites are
/// updated together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn square(side: f64) -> Self {
        Shape::Square { side }
    }

    /// Area of the shape. Dimensions are taken as given; a negative radius or
    /// side is not rejected and simply flows through the formula.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Square { side } => side * side,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle { radius } => write!(f, "Circle(r = {})", radius),
            Shape::Square { side } => write!(f, "Square(s = {})", side),
        }
    }
}

// =============================================================================
// Milestone 2: Exhaustive dispatch at call sites
// =============================================================================

pub fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Circle { radius } => format!("a circle of radius {}", radius),
        Shape::Square { side } => format!("a square with side {}", side),
    }
}

pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(Shape::area).sum()
}

pub fn largest(shapes: &[Shape]) -> Option<&Shape> {
    shapes
        .iter()
        .max_by(|a, b| a.area().partial_cmp(&b.area()).expect("finite areas"))
}

// =============================================================================
// Milestone 3: The open alternative, for contrast
// =============================================================================
//
// A trait object hierarchy computes the same areas but loses the closed-set
// guarantee: any downstream crate can add an implementor, and no match site
// exists for the compiler to flag. The enum above is the canonical model.

pub trait HasArea {
    fn area(&self) -> f64;
}

pub struct CircleObj {
    pub radius: f64,
}

pub struct SquareObj {
    pub side: f64,
}

impl HasArea for CircleObj {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl HasArea for SquareObj {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

pub fn total_area_dyn(shapes: &[Box<dyn HasArea>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

// =============================================================================
// Main Function - Demonstrates the shape family
// =============================================================================

fn main() {
    println!("{}", "=== Sealed Shape Hierarchy ===".bold());

    println!("\n--- Milestone 1: Closed variant set ---");
    let shape = Shape::circle(5.0);
    println!("Area of shape: {}", shape.area());
    println!("Area of {}: {}", Shape::square(4.0), Shape::square(4.0).area());

    println!("\n--- Milestone 2: Exhaustive dispatch ---");
    let shapes = vec![Shape::circle(1.0), Shape::square(2.0), Shape::circle(0.5)];
    for s in &shapes {
        println!("{} has area {:.4}", describe(s), s.area());
    }
    println!("Total area: {:.4}", total_area(&shapes));
    if let Some(big) = largest(&shapes) {
        println!("Largest: {}", big);
    }

    println!("\n--- Milestone 3: Open trait-object alternative ---");
    let dyn_shapes: Vec<Box<dyn HasArea>> = vec![
        Box::new(CircleObj { radius: 1.0 }),
        Box::new(SquareObj { side: 2.0 }),
    ];
    println!("Total area via trait objects: {:.4}", total_area_dyn(&dyn_shapes));

    println!("\n{}", "=== Done ===".green());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_circle_area_formula() {
        assert_close(Shape::circle(5.0).area(), 78.53981633974483);
        assert_close(Shape::circle(1.0).area(), PI);
        assert_close(Shape::circle(0.0).area(), 0.0);
    }

    #[test]
    fn test_square_area_formula() {
        assert_eq!(Shape::square(4.0).area(), 16.0);
        assert_eq!(Shape::square(0.0).area(), 0.0);
        assert_close(Shape::square(1.5).area(), 2.25);
    }

    #[test]
    fn test_negative_dimensions_pass_through() {
        // No validation anywhere: the formula is applied as-is.
        assert_close(Shape::circle(-5.0).area(), 78.53981633974483);
        assert_eq!(Shape::square(-4.0).area(), 16.0);
    }

    #[test]
    fn test_area_is_value_based() {
        let a = Shape::circle(2.0);
        let b = a; // Copy
        assert_eq!(a, b);
        assert_eq!(a.area(), b.area());
    }

    #[test]
    fn test_describe_matches_variant() {
        assert_eq!(describe(&Shape::circle(3.0)), "a circle of radius 3");
        assert_eq!(describe(&Shape::square(2.0)), "a square with side 2");
    }

    #[test]
    fn test_total_area_sums_all_variants() {
        let shapes = [Shape::circle(1.0), Shape::square(2.0)];
        assert_close(total_area(&shapes), PI + 4.0);
    }

    #[test]
    fn test_total_area_empty() {
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_largest_picks_max_area() {
        let shapes = [Shape::circle(1.0), Shape::square(10.0), Shape::circle(2.0)];
        assert_eq!(largest(&shapes), Some(&Shape::square(10.0)));
        assert_eq!(largest(&[]), None);
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Shape::circle(5.0).to_string(), "Circle(r = 5)");
        assert_eq!(Shape::square(4.0).to_string(), "Square(s = 4)");
    }

    #[test]
    fn test_trait_object_areas_agree_with_enum() {
        let dyn_shapes: Vec<Box<dyn HasArea>> = vec![
            Box::new(CircleObj { radius: 5.0 }),
            Box::new(SquareObj { side: 4.0 }),
        ];
        let enum_shapes = [Shape::circle(5.0), Shape::square(4.0)];
        assert_close(total_area_dyn(&dyn_shapes), total_area(&enum_shapes));
    }
}
