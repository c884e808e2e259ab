// Derived items for tests/fixtures/expr.json, in emission order.
// Compiled by tests/expr_runtime.rs and compared against fresh derivations by
// tests/derive_golden.rs.

struct IntLit {
    value: i32
}

impl IntLit {
    fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Expr<i32> for IntLit {
    fn dispatch(&self, int_lit: &mut dyn FnMut(&i32), bool_lit: &mut dyn FnMut(&i32), hole: &mut dyn FnMut()) {
        int_lit(&self.value)
    }
    fn equals(&self, other: &dyn Expr<i32>) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut |value: &i32| equal.set(::adt_derive::rt::eq::value(&self.value, value)),
            &mut |_: &i32| equal.set(false),
            &mut || equal.set(false)
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        23u64.wrapping_add(::adt_derive::rt::hash::value(&self.value)).wrapping_mul(23)
    }
}

struct BoolLit {
    value: bool
}

impl BoolLit {
    fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Expr<bool> for BoolLit {
    fn dispatch(&self, int_lit: &mut dyn FnMut(&bool), bool_lit: &mut dyn FnMut(&bool), hole: &mut dyn FnMut()) {
        bool_lit(&self.value)
    }
    fn equals(&self, other: &dyn Expr<bool>) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut |_: &bool| equal.set(false),
            &mut |value: &bool| equal.set(::adt_derive::rt::eq::value(&self.value, value)),
            &mut || equal.set(false)
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        29u64.wrapping_add(::adt_derive::rt::hash::value(&self.value)).wrapping_mul(29)
    }
}

static HOLE: ::adt_derive::rt::Singleton<Hole> = ::adt_derive::rt::Singleton::new();

struct Hole {}

impl Hole {
    fn new() -> Self {
        Self {}
    }
}

impl<T: Send + Sync + 'static> Expr<T> for Hole {
    fn dispatch(&self, int_lit: &mut dyn FnMut(&T), bool_lit: &mut dyn FnMut(&T), hole: &mut dyn FnMut()) {
        hole()
    }
    fn equals(&self, other: &dyn Expr<T>) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(&mut |_: &T| equal.set(false), &mut |_: &T| equal.set(false), &mut || equal.set(true));
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        31u64
    }
}

struct Lazy<T: Send + Sync + 'static> {
    memo: ::adt_derive::rt::Memo<::std::sync::Arc<dyn Expr<T>>>,
}

impl<T: Send + Sync + 'static> Lazy<T> {
    fn new(expr: impl Fn() -> ::std::sync::Arc<dyn Expr<T>> + Send + Sync + 'static) -> Self {
        Self { memo: ::adt_derive::rt::Memo::new(expr) }
    }

    fn eval(&self) -> &::std::sync::Arc<dyn Expr<T>> {
        self.memo.force()
    }
}

impl<T: Send + Sync + 'static> Expr<T> for Lazy<T> {
    fn dispatch(&self, int_lit: &mut dyn FnMut(&T), bool_lit: &mut dyn FnMut(&T), hole: &mut dyn FnMut()) {
        self.eval().dispatch(int_lit, bool_lit, hole)
    }
    fn equals(&self, other: &dyn Expr<T>) -> bool {
        self.eval().equals(other)
    }
    fn hash_code(&self) -> u64 {
        self.eval().hash_code()
    }
}

pub fn int_lit(value: i32) -> ::std::sync::Arc<dyn Expr<i32>> {
    ::std::sync::Arc::new(IntLit::new(value))
}

pub fn bool_lit(value: bool) -> ::std::sync::Arc<dyn Expr<bool>> {
    ::std::sync::Arc::new(BoolLit::new(value))
}

pub fn hole<T: Send + Sync + 'static>() -> ::std::sync::Arc<dyn Expr<T>> {
    HOLE.get_or_init(Hole::new)
}

pub fn lazy<T: Send + Sync + 'static>(
    expr: impl Fn() -> ::std::sync::Arc<dyn Expr<T>> + Send + Sync + 'static
) -> ::std::sync::Arc<dyn Expr<T>> {
    ::std::sync::Arc::new(Lazy::new(expr))
}
