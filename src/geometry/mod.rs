use num_traits::Num;


/// Absolute difference that also works for unsigned types
fn abs_diff<T>(a: T, b: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    if a > b { a - b } else { b - a }
}

/// Manhattan distance
/// Admissible and consistent on a 4-connected grid where every move costs at least 1
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Num + Copy + PartialOrd,
    {
    abs_diff(x1, x2) + abs_diff(y1, y2)
}
