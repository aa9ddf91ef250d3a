//! Comparison Expressions and Filters
//!
//! Search parameters such as `rating=>=4.5` carry a comparison operator
//! followed by a number. Every filter here fails open: an expression that
//! can't be read leaves the result set untouched instead of rejecting the
//! request.

use super::types::SearchQuery;
use crate::recipe::types::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
}

impl Comparison {
    /// Operator tokens in match order. Two-character operators come first so
    /// `>=` is never read as `>` followed by `=4.5`.
    const TOKENS: [(&'static str, Comparison); 5] = [
        (">=", Comparison::Ge),
        ("<=", Comparison::Le),
        (">", Comparison::Gt),
        ("<", Comparison::Lt),
        ("=", Comparison::Eq),
    ];

    /// Splits a leading operator off `expr`.
    pub fn split(expr: &str) -> Option<(Comparison, &str)> {
        Self::TOKENS
            .iter()
            .find_map(|(token, op)| expr.strip_prefix(token).map(|rest| (*op, rest)))
    }

    pub fn holds<T: PartialOrd>(self, value: T, operand: T) -> bool {
        match self {
            Comparison::Ge => value >= operand,
            Comparison::Le => value <= operand,
            Comparison::Gt => value > operand,
            Comparison::Lt => value < operand,
            Comparison::Eq => value == operand,
        }
    }
}

/// A parsed `<op><number>` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonExpr<T> {
    pub op: Comparison,
    pub operand: T,
}

impl<T: PartialOrd + Copy> ComparisonExpr<T> {
    pub fn matches(&self, value: T) -> bool {
        self.op.holds(value, self.operand)
    }
}

impl ComparisonExpr<f32> {
    /// Decimal operand. Surrounding whitespace around the number is ignored;
    /// `inf` and `nan` style operands are not numbers here.
    pub fn parse_decimal(expr: &str) -> Option<Self> {
        Self::parse_with(expr, |literal| {
            literal
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|operand| operand.is_finite())
        })
    }
}

impl ComparisonExpr<i32> {
    /// Whole-number operand, e.g. `<=30`. `=45.0` is not a whole number.
    pub fn parse_whole(expr: &str) -> Option<Self> {
        Self::parse_with(expr, |literal| literal.parse().ok())
    }
}

impl<T> ComparisonExpr<T> {
    fn parse_with(expr: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Self> {
        let (op, literal) = Comparison::split(expr)?;
        let operand = parse(literal)?;
        Some(Self { op, operand })
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keeps recipes whose field satisfies `expr`. Recipes without a value are
/// dropped. With no readable expression nothing is filtered.
fn retain_numeric<T: PartialOrd + Copy>(
    recipes: &mut Vec<Recipe>,
    expr: Option<ComparisonExpr<T>>,
    field: impl Fn(&Recipe) -> Option<T>,
) {
    if let Some(expr) = expr {
        recipes.retain(|recipe| field(recipe).is_some_and(|value| expr.matches(value)));
    }
}

/// Calorie predicate. Passes whenever either side can't be evaluated.
pub fn matches_calories(recipe: &Recipe, expr: &str) -> bool {
    let Some(calories) = recipe.calories() else {
        return true;
    };
    let Some(expr) = ComparisonExpr::parse_decimal(expr) else {
        return true;
    };
    expr.matches(calories)
}

/// Runs the search filters over `recipes` in a fixed order: title, cuisine,
/// rating, total time, calories. Every active filter must pass.
pub fn apply_filters(mut recipes: Vec<Recipe>, query: &SearchQuery) -> Vec<Recipe> {
    if let Some(title) = query.title() {
        recipes.retain(|r| contains_ignore_case(&r.details.title, title));
    }

    if let Some(cuisine) = query.cuisine() {
        recipes.retain(|r| contains_ignore_case(&r.details.cuisine, cuisine));
    }

    if let Some(rating) = query.rating() {
        let expr = ComparisonExpr::parse_decimal(rating);
        if expr.is_none() {
            tracing::debug!("Ignoring unreadable rating filter '{}'", rating);
        }
        retain_numeric(&mut recipes, expr, |r| r.details.rating);
    }

    if let Some(total_time) = query.total_time() {
        let expr = ComparisonExpr::parse_whole(total_time);
        if expr.is_none() {
            tracing::debug!("Ignoring unreadable total_time filter '{}'", total_time);
        }
        retain_numeric(&mut recipes, expr, |r| r.details.total_time);
    }

    if let Some(calories) = query.calories() {
        recipes.retain(|r| matches_calories(r, calories));
    }

    recipes
}
