use std::fmt;

/// `[a, b, c]`
pub fn array<T: fmt::Display>(values: &[T]) -> Array<'_, T> { Array(values) }

/// `[[a], [b, c]]`, each element written by `element`.
pub fn arrays<T, F>(values: &[T], element: F) -> Arrays<'_, T, F>
where
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    Arrays { values, element }
}

/// The value, or `null` when absent.
pub fn nullable<T: fmt::Display>(value: &Option<T>) -> Nullable<'_, T> { Nullable(value) }

pub struct Array<'a, T>(&'a [T]);

pub struct Arrays<'a, T, F> {
    values: &'a [T],
    element: F,
}

pub struct Nullable<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Array<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list(f, self.0, |f, value| write!(f, "{value}"))
    }
}

impl<T, F> fmt::Display for Arrays<'_, T, F>
where
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { list(f, self.values, &self.element) }
}

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

fn list<T>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
    element: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        element(f, value)?;
    }
    f.write_str("]")
}
