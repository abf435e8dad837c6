//! Element Model
//!
//! Canonical, per-run arena of component types and annotated declarations.
//! This is the processor's view of the host compiler's element/type model:
//! everything is loaded up front and read-only for the rest of the pass.
//!
//! Types and declarations are referred to by handles ([`TypeId`],
//! [`ElementId`]) that index into the arena. Handle equality is index
//! equality, which preserves the host's same-type-instance semantics: two
//! types carrying identical qualified names are still distinct instances
//! unless they are literally the same entry.

use serde::{Deserialize, Serialize};

/// Handle to a component type in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub(crate) usize);

/// Handle to a declaration (method, field, or nested type) in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_private_or_protected(self) -> bool {
        matches!(self, Visibility::Private | Visibility::Protected)
    }
}

/// Source language a declaration was written in. Kotlin properties are
/// compiled to a private backing field plus companion accessors, so the two
/// languages need different accessor resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLanguage {
    Java,
    Kotlin,
}

/// Annotation payloads the processor understands, as handed over by the
/// host's annotation-scanning facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// Binds a setter to an external attribute. `value` is the raw styleable
    /// R reference; `default_value` is a second R reference or the sentinel
    /// [`NO_DEFAULT_VALUE`].
    Attr { value: i32, default_value: i32 },
    /// Marks a component class as eligible for a generated style applier.
    Styleable,
    /// Minimum platform API level for an attribute. `value` is a legacy
    /// alias of `api`; both default to 1.
    RequiresApi { api: i32, value: i32 },
    /// The annotated int parameter is a pixel dimension.
    Px,
    /// The annotated int parameter is a packed color.
    ColorInt,
    /// The annotated parameter is a fraction of a base value.
    Fraction,
    /// The annotated int parameter is a resource identifier of any kind.
    AnyRes,
    /// The annotated string parameter receives the literal attribute text,
    /// never a resolved resource.
    NonResourceString,
}

/// Sentinel for "no default value" in [`Annotation::Attr`].
pub const NO_DEFAULT_VALUE: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Method { params: Vec<TypeId> },
    Field,
    Type { id: TypeId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    /// Enclosing type; `None` for top-level class declarations.
    pub enclosing: Option<TypeId>,
    pub visibility: Visibility,
    pub language: SourceLanguage,
    pub annotations: Vec<Annotation>,
}

impl Element {
    pub fn attr_annotation(&self) -> Option<(i32, i32)> {
        self.annotations.iter().find_map(|a| match *a {
            Annotation::Attr {
                value,
                default_value,
            } => Some((value, default_value)),
            _ => None,
        })
    }

    pub fn requires_api_annotation(&self) -> Option<(i32, i32)> {
        self.annotations.iter().find_map(|a| match *a {
            Annotation::RequiresApi { api, value } => Some((api, value)),
            _ => None,
        })
    }

    pub fn is_styleable(&self) -> bool {
        self.annotations.contains(&Annotation::Styleable)
    }

    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

#[derive(Debug, Clone)]
struct TypeData {
    qualified_name: String,
    super_type: Option<TypeId>,
    members: Vec<ElementId>,
}

/// Arena of types and declarations for one compiler invocation.
#[derive(Debug, Default)]
pub struct ElementModel {
    types: Vec<TypeData>,
    elements: Vec<Element>,
}

impl ElementModel {
    pub fn new() -> Self {
        ElementModel::default()
    }

    /// Registers a type node. The supertype, if any, must already exist.
    pub fn add_type(&mut self, qualified_name: &str, super_type: Option<TypeId>) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(TypeData {
            qualified_name: qualified_name.to_string(),
            super_type,
            members: Vec::new(),
        });
        id
    }

    pub fn add_method(
        &mut self,
        owner: TypeId,
        name: &str,
        visibility: Visibility,
        language: SourceLanguage,
        params: &[TypeId],
    ) -> ElementId {
        self.push_member(
            owner,
            Element {
                name: name.to_string(),
                kind: ElementKind::Method {
                    params: params.to_vec(),
                },
                enclosing: Some(owner),
                visibility,
                language,
                annotations: Vec::new(),
            },
        )
    }

    pub fn add_field(
        &mut self,
        owner: TypeId,
        name: &str,
        visibility: Visibility,
        language: SourceLanguage,
    ) -> ElementId {
        self.push_member(
            owner,
            Element {
                name: name.to_string(),
                kind: ElementKind::Field,
                enclosing: Some(owner),
                visibility,
                language,
                annotations: Vec::new(),
            },
        )
    }

    /// Registers a nested type declaration (companion objects and the like)
    /// as a member of `owner`.
    pub fn add_nested_type(&mut self, owner: TypeId, name: &str, nested: TypeId) -> ElementId {
        self.push_member(
            owner,
            Element {
                name: name.to_string(),
                kind: ElementKind::Type { id: nested },
                enclosing: Some(owner),
                visibility: Visibility::Public,
                language: SourceLanguage::Kotlin,
                annotations: Vec::new(),
            },
        )
    }

    /// Registers the top-level class declaration element for `ty`, the kind
    /// of element `@Styleable` is placed on.
    pub fn add_class_element(
        &mut self,
        ty: TypeId,
        visibility: Visibility,
        language: SourceLanguage,
    ) -> ElementId {
        let name = simple_name(&self.types[ty.0].qualified_name).to_string();
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            name,
            kind: ElementKind::Type { id: ty },
            enclosing: None,
            visibility,
            language,
            annotations: Vec::new(),
        });
        id
    }

    pub fn annotate(&mut self, element: ElementId, annotation: Annotation) {
        self.elements[element.0].annotations.push(annotation);
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn qualified_name(&self, ty: TypeId) -> &str {
        &self.types[ty.0].qualified_name
    }

    pub fn super_type(&self, ty: TypeId) -> Option<TypeId> {
        self.types[ty.0].super_type
    }

    pub fn members(&self, ty: TypeId) -> &[ElementId] {
        &self.types[ty.0].members
    }

    /// Co-members of the element's enclosing type, the element itself
    /// excluded. Top-level declarations have no siblings.
    pub fn siblings(&self, element: ElementId) -> Vec<ElementId> {
        match self.elements[element.0].enclosing {
            Some(ty) => self.types[ty.0]
                .members
                .iter()
                .copied()
                .filter(|&m| m != element)
                .collect(),
            None => Vec::new(),
        }
    }

    fn push_member(&mut self, owner: TypeId, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        self.types[owner.0].members.push(id);
        id
    }
}

/// Last segment of a dot-separated qualified name.
pub fn simple_name(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(i) => &qualified_name[i + 1..],
        None => qualified_name,
    }
}
