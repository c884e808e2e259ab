//! Field type categories.
//!
//! A closed table: every per-field rule of the structural derivator is picked
//! by matching on [`Category`], never by dispatching on the type itself.

use serde::Serialize;
use syn::{GenericArgument, PathArguments, Type};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    /// `[E; N]`, `[E]`, `&[E]`, `Vec<E>`, `Box<[E]>`, `Arc<[E]>`, `Rc<[E]>`
    Array(Box<Category>),
    EnumRef,
    ObjectRef,
}

impl Category {
    pub fn of(ty: &Type, is_enum: bool) -> Self {
        if is_enum {
            return Category::EnumRef;
        }
        match ty {
            Type::Array(array) => Category::array_of(&array.elem),
            Type::Slice(slice) => Category::array_of(&slice.elem),
            Type::Reference(reference) => match &*reference.elem {
                Type::Slice(slice) => Category::array_of(&slice.elem),
                _ => Category::ObjectRef,
            },
            Type::Paren(paren) => Category::of(&paren.elem, false),
            Type::Group(group) => Category::of(&group.elem, false),
            Type::Path(path) if path.qself.is_none() => Category::of_path(&path.path),
            _ => Category::ObjectRef,
        }
    }

    fn array_of(element: &Type) -> Self {
        Category::Array(Box::new(Category::of(element, false)))
    }

    fn of_path(path: &syn::Path) -> Self {
        let Some(last) = path.segments.last() else { return Category::ObjectRef };
        let name = last.ident.to_string();
        match (name.as_str(), single_type_argument(&last.arguments)) {
            ("Vec", Some(element)) => Category::array_of(element),
            ("Box" | "Arc" | "Rc", Some(Type::Slice(slice))) => Category::array_of(&slice.elem),
            (_, None) if last.arguments.is_none() => primitive(&name),
            _ => Category::ObjectRef,
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Category::Array(_) | Category::EnumRef | Category::ObjectRef)
    }
}

fn primitive(name: &str) -> Category {
    match name {
        "bool" => Category::Boolean,
        "i8" | "u8" => Category::Byte,
        "i16" | "u16" => Category::Short,
        "char" => Category::Char,
        "i32" | "u32" => Category::Int,
        "i64" | "u64" | "i128" | "u128" | "isize" | "usize" => Category::Long,
        "f32" => Category::Float,
        "f64" => Category::Double,
        _ => Category::ObjectRef,
    }
}

fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle) = arguments else { return None };
    let mut types = angle.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None,
    }
}

/// `Option<…>` arguments are the only nullable references.
pub fn is_nullable(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
