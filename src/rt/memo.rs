use once_cell::sync::OnceCell;
use parking_lot::Mutex;

type Expression<V> = Box<dyn Fn() -> V + Send + Sync>;

/// Evaluate-once cell backing a lazy variant.
///
/// The expression runs at most once to completion. It is dropped after the
/// value is committed, so whatever it captured is released. A panicking
/// expression leaves the cell unset and the next `force` runs it again.
///
/// Forcing a memo from inside its own expression deadlocks.
pub struct Memo<V> {
    /// Also the per-instance lock.
    expression: Mutex<Option<Expression<V>>>,
    evaluation: OnceCell<V>,
}

impl<V> Memo<V> {
    pub fn new(expression: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Memo { expression: Mutex::new(Some(Box::new(expression))), evaluation: OnceCell::new() }
    }

    pub fn force(&self) -> &V {
        if let Some(value) = self.evaluation.get() {
            return value;
        }
        let mut expression = self.expression.lock();
        if let Some(value) = self.evaluation.get() {
            return value;
        }
        let Some(compute) = expression.as_ref() else {
            unreachable!("memo expression released before its value was committed")
        };
        let value = compute();
        let value = self.evaluation.get_or_init(|| value);
        *expression = None;
        value
    }

    pub fn is_evaluated(&self) -> bool { self.evaluation.get().is_some() }

    /// Whether the expression is still held.
    pub fn is_pending(&self) -> bool { self.expression.lock().is_some() }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Memo<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.evaluation.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<pending>)"),
        }
    }
}
