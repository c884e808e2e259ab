// Derived items for tests/fixtures/shape.json, in emission order.
// Compiled by tests/shape_runtime.rs and compared against fresh derivations by
// tests/derive_golden.rs.

static DOT: ::adt_derive::rt::Singleton<Dot> = ::adt_derive::rt::Singleton::new();

struct Dot {}

impl Dot {
    fn new() -> Self {
        Self {}
    }
}

impl Shape for Dot {
    fn dispatch(
        &self,
        dot: &mut dyn FnMut(),
        circle: &mut dyn FnMut(&f64),
        polygon: &mut dyn FnMut(&Vec<f32>, &Vec<Vec<f64>>),
        label: &mut dyn FnMut(&Option<String>, &bool)
    ) {
        dot()
    }
    fn equals(&self, other: &dyn Shape) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut || equal.set(true),
            &mut |_: &f64| equal.set(false),
            &mut |_: &Vec<f32>, _: &Vec<Vec<f64>>| equal.set(false),
            &mut |_: &Option<String>, _: &bool| equal.set(false)
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        23u64
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str("Dot()")
    }
}

struct Circle {
    radius: f64
}

impl Circle {
    fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn dispatch(
        &self,
        dot: &mut dyn FnMut(),
        circle: &mut dyn FnMut(&f64),
        polygon: &mut dyn FnMut(&Vec<f32>, &Vec<Vec<f64>>),
        label: &mut dyn FnMut(&Option<String>, &bool)
    ) {
        circle(&self.radius)
    }
    fn equals(&self, other: &dyn Shape) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut || equal.set(false),
            &mut |radius: &f64| equal.set(::adt_derive::rt::eq::double(self.radius, *radius)),
            &mut |_: &Vec<f32>, _: &Vec<Vec<f64>>| equal.set(false),
            &mut |_: &Option<String>, _: &bool| equal.set(false)
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        29u64.wrapping_add(::adt_derive::rt::hash::double(self.radius)).wrapping_mul(29)
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "Circle({})", self.radius)
    }
}

struct Polygon {
    xs: Vec<f32>,
    grid: Vec<Vec<f64>>
}

impl Polygon {
    fn new(xs: Vec<f32>, grid: Vec<Vec<f64>>) -> Self {
        Self { xs, grid }
    }
}

impl Shape for Polygon {
    fn dispatch(
        &self,
        dot: &mut dyn FnMut(),
        circle: &mut dyn FnMut(&f64),
        polygon: &mut dyn FnMut(&Vec<f32>, &Vec<Vec<f64>>),
        label: &mut dyn FnMut(&Option<String>, &bool)
    ) {
        polygon(&self.xs, &self.grid)
    }
    fn equals(&self, other: &dyn Shape) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut || equal.set(false),
            &mut |_: &f64| equal.set(false),
            &mut |xs: &Vec<f32>, grid: &Vec<Vec<f64>>| equal.set(
                ::adt_derive::rt::eq::floats(&self.xs[..], &xs[..])
                    && ::adt_derive::rt::eq::arrays(&self.grid[..], &grid[..], |a, b| ::adt_derive::rt::eq::doubles(&a[..], &b[..]))
            ),
            &mut |_: &Option<String>, _: &bool| equal.set(false)
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        31u64
            .wrapping_add(::adt_derive::rt::hash::floats(&self.xs[..]))
            .wrapping_mul(31)
            .wrapping_add(::adt_derive::rt::hash::arrays(&self.grid[..], |e| ::adt_derive::rt::hash::doubles(&e[..])))
            .wrapping_mul(31)
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(
            f,
            "Polygon({}, {})",
            ::adt_derive::rt::render::array(&self.xs[..]),
            ::adt_derive::rt::render::arrays(&self.grid[..], |f, e| ::std::fmt::Display::fmt(& ::adt_derive::rt::render::array(&e[..]), f))
        )
    }
}

struct Label {
    text: Option<String>,
    bold: bool
}

impl Label {
    fn new(text: Option<String>, bold: bool) -> Self {
        Self { text, bold }
    }
}

impl Shape for Label {
    fn dispatch(
        &self,
        dot: &mut dyn FnMut(),
        circle: &mut dyn FnMut(&f64),
        polygon: &mut dyn FnMut(&Vec<f32>, &Vec<Vec<f64>>),
        label: &mut dyn FnMut(&Option<String>, &bool)
    ) {
        label(&self.text, &self.bold)
    }
    fn equals(&self, other: &dyn Shape) -> bool {
        let equal = ::std::cell::Cell::new(false);
        other.dispatch(
            &mut || equal.set(false),
            &mut |_: &f64| equal.set(false),
            &mut |_: &Vec<f32>, _: &Vec<Vec<f64>>| equal.set(false),
            &mut |text: &Option<String>, bold: &bool| equal.set(
                ::adt_derive::rt::eq::value(&self.text, text) && (self.bold == *bold)
            )
        );
        equal.get()
    }
    fn hash_code(&self) -> u64 {
        37u64
            .wrapping_add(::adt_derive::rt::hash::value(&self.text))
            .wrapping_mul(37)
            .wrapping_add(::adt_derive::rt::hash::boolean(self.bold))
            .wrapping_mul(37)
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "Label({}, {})", ::adt_derive::rt::render::nullable(&self.text), self.bold)
    }
}

struct Lazy {
    memo: ::adt_derive::rt::Memo<::std::sync::Arc<dyn Shape>>,
}

impl Lazy {
    fn new(shape: impl Fn() -> ::std::sync::Arc<dyn Shape> + Send + Sync + 'static) -> Self {
        Self { memo: ::adt_derive::rt::Memo::new(shape) }
    }

    fn eval(&self) -> &::std::sync::Arc<dyn Shape> {
        self.memo.force()
    }
}

impl Shape for Lazy {
    fn dispatch(
        &self,
        dot: &mut dyn FnMut(),
        circle: &mut dyn FnMut(&f64),
        polygon: &mut dyn FnMut(&Vec<f32>, &Vec<Vec<f64>>),
        label: &mut dyn FnMut(&Option<String>, &bool)
    ) {
        self.eval().dispatch(dot, circle, polygon, label)
    }
    fn equals(&self, other: &dyn Shape) -> bool {
        self.eval().equals(other)
    }
    fn hash_code(&self) -> u64 {
        self.eval().hash_code()
    }
    fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        self.eval().render(f)
    }
}

pub(super) fn dot() -> ::std::sync::Arc<dyn Shape> {
    DOT.get_or_init(Dot::new)
}

pub(super) fn circle(radius: f64) -> ::std::sync::Arc<dyn Shape> {
    ::std::sync::Arc::new(Circle::new(radius))
}

pub(super) fn polygon(xs: Vec<f32>, grid: Vec<Vec<f64>>) -> ::std::sync::Arc<dyn Shape> {
    ::std::sync::Arc::new(Polygon::new(xs, grid))
}

pub(super) fn label(text: Option<String>, bold: bool) -> ::std::sync::Arc<dyn Shape> {
    if text.is_none() {
        ::adt_derive::rt::null_argument("text");
    }
    ::std::sync::Arc::new(Label::new(text, bold))
}

pub fn lazy(shape: impl Fn() -> ::std::sync::Arc<dyn Shape> + Send + Sync + 'static) -> ::std::sync::Arc<dyn Shape> {
    ::std::sync::Arc::new(Lazy::new(shape))
}
