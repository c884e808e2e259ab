// Derived items for tests/fixtures/maybe.json, in emission order.
// Compiled by tests/maybe_runtime.rs and compared against fresh derivations by
// tests/derive_maybe.rs.

static NONE: ::adt_derive::rt::Singleton<None_> = ::adt_derive::rt::Singleton::new();

struct None_ {}

impl None_ {
    fn new() -> Self {
        Self {}
    }
}

impl<T: PartialEq + Hash + Display + Send + Sync + 'static> Maybe<T> for None_ {
    fn dispatch(&self, cases: &mut dyn MaybeCases<T>) {
        cases.none()
    }
    fn equals(&self, other: &dyn Maybe<T>) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(&mut maybe_cases(|| equal.set(true), |_: &T| equal.set(false)));
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        23u64
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str("None()")
    }
}

struct Some_<T: PartialEq + Hash + Display + Send + Sync + 'static> {
    value: T
}

impl<T: PartialEq + Hash + Display + Send + Sync + 'static> Some_<T> {
    fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: PartialEq + Hash + Display + Send + Sync + 'static> Maybe<T> for Some_<T> {
    fn dispatch(&self, cases: &mut dyn MaybeCases<T>) {
        cases.some(&self.value)
    }
    fn equals(&self, other: &dyn Maybe<T>) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(&mut maybe_cases(|| equal.set(false), |value: &T| equal.set(::adt_derive::rt::eq::value(&self.value, value))));
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        29u64.wrapping_add(::adt_derive::rt::hash::value(&self.value)).wrapping_mul(29)
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "Some({})", self.value)
    }
}

struct Lazy<T: PartialEq + Hash + Display + Send + Sync + 'static> {
    memo: ::adt_derive::rt::Memo<::std::sync::Arc<dyn Maybe<T>>>,
}

impl<T: PartialEq + Hash + Display + Send + Sync + 'static> Lazy<T> {
    fn new(maybe: impl Fn() -> ::std::sync::Arc<dyn Maybe<T>> + Send + Sync + 'static) -> Self {
        Self { memo: ::adt_derive::rt::Memo::new(maybe) }
    }

    fn eval(&self) -> &::std::sync::Arc<dyn Maybe<T>> {
        self.memo.force()
    }
}

impl<T: PartialEq + Hash + Display + Send + Sync + 'static> Maybe<T> for Lazy<T> {
    fn dispatch(&self, cases: &mut dyn MaybeCases<T>) {
        self.eval().dispatch(cases)
    }
    fn equals(&self, other: &dyn Maybe<T>) -> bool {
        self.eval().equals(other)
    }
    fn hash_code(&self) -> u64 {
        self.eval().hash_code()
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        self.eval().render(f)
    }
}

pub fn none<T: PartialEq + Hash + Display + Send + Sync + 'static>() -> ::std::sync::Arc<dyn Maybe<T>> {
    NONE.get_or_init(None_::new)
}

pub fn some<T: PartialEq + Hash + Display + Send + Sync + 'static>(value: T) -> ::std::sync::Arc<dyn Maybe<T>> {
    ::std::sync::Arc::new(Some_::new(value))
}

pub fn lazy<T: PartialEq + Hash + Display + Send + Sync + 'static>(
    maybe: impl Fn() -> ::std::sync::Arc<dyn Maybe<T>> + Send + Sync + 'static
) -> ::std::sync::Arc<dyn Maybe<T>> {
    ::std::sync::Arc::new(Lazy::new(maybe))
}
