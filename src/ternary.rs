/// A one-line conditional.  `cargo fmt` spreads every `if` over five
/// lines, and the edge-clamping tables in the energy and seam code
/// read much better as a column of these.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
