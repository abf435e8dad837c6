//! Attribute Extractor Tests

use style_processor::attr_extractor::{AttrExtractor, AttrInfo};
use style_processor::diagnostics::Diagnostics;
use style_processor::elements::{
    Annotation, ElementId, ElementModel, SourceLanguage, TypeId, Visibility,
};
use style_processor::format::Format;
use style_processor::resources::{ResourceError, ResourceId, ResourceResolver, ResourceTable};
use style_processor::ProcessorError;

const ATTR_REF: i32 = 100;
const DEFAULT_REF: i32 = 200;

struct Fixture {
    model: ElementModel,
    resources: ResourceTable,
    view: TypeId,
    int_ty: TypeId,
}

fn fixture() -> Fixture {
    let mut model = ElementModel::new();
    let view = model.add_type("com.example.MyView", None);
    let int_ty = model.add_type("int", None);
    let mut resources = ResourceTable::new();
    resources.insert(ATTR_REF, "R.styleable.MyView_title");
    resources.insert(DEFAULT_REF, "R.dimen.default_title_size");
    Fixture {
        model,
        resources,
        view,
        int_ty,
    }
}

impl Fixture {
    fn add_setter(&mut self, name: &str, visibility: Visibility, params: &[TypeId]) -> ElementId {
        let setter = self
            .model
            .add_method(self.view, name, visibility, SourceLanguage::Java, params);
        self.model.annotate(
            setter,
            Annotation::Attr {
                value: ATTR_REF,
                default_value: -1,
            },
        );
        setter
    }

    fn extract(&self, setter: ElementId, diagnostics: &mut Diagnostics) -> Option<AttrInfo> {
        let extractor = AttrExtractor::new(&self.model, &self.resources);
        extractor.extract(setter, diagnostics).unwrap()
    }
}

#[test]
fn extracts_a_well_formed_setter() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[int_ty]);
    let mut diagnostics = Diagnostics::new();

    let attr = f.extract(setter, &mut diagnostics).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(attr.element, setter);
    assert_eq!(attr.target_type, int_ty);
    assert_eq!(attr.target_format, Format::Int);
    assert_eq!(attr.styleable_res_id.code, "R.styleable.MyView_title");
    assert_eq!(attr.default_value_res_id, None);
    assert_eq!(attr.requires_api, 1);
    assert_eq!(
        attr.javadoc.as_str(),
        "@see com.example.MyView#setTitleSize(int)\n"
    );
    assert_eq!(attr.kdoc.as_str(), "@see com.example.MyView.setTitleSize\n");
}

#[test]
fn private_setter_yields_one_diagnostic() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Private, &[int_ty]);
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.errors()[0]
        .message
        .contains("can't be private or protected"));
}

#[test]
fn protected_setter_yields_one_diagnostic() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Protected, &[int_ty]);
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn zero_parameters_yield_one_diagnostic() {
    let mut f = fixture();
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[]);
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.errors()[0]
        .message
        .contains("must provide a single parameter"));
}

#[test]
fn two_parameters_yield_one_diagnostic() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[int_ty, int_ty]);
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn missing_attr_payload_is_fatal() {
    let mut f = fixture();
    let setter = f.model.add_method(
        f.view,
        "setTitleSize",
        Visibility::Public,
        SourceLanguage::Java,
        &[f.int_ty],
    );
    let extractor = AttrExtractor::new(&f.model, &f.resources);
    let mut diagnostics = Diagnostics::new();

    let err = extractor.extract(setter, &mut diagnostics).unwrap_err();
    assert!(matches!(err, ProcessorError::MissingAttrAnnotation { .. }));
    assert!(diagnostics.is_empty());
}

#[test]
fn unsupported_parameter_type_yields_one_diagnostic() {
    let mut f = fixture();
    let exotic = f.model.add_type("com.example.Exotic", None);
    let setter = f.add_setter("setExotic", Visibility::Public, &[exotic]);
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.errors()[0]
        .message
        .contains("Unsupported attribute value type"));
}

#[test]
fn px_annotation_refines_int_to_dimension() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[int_ty]);
    f.model.annotate(setter, Annotation::Px);
    let mut diagnostics = Diagnostics::new();

    let attr = f.extract(setter, &mut diagnostics).unwrap();
    assert_eq!(attr.target_format, Format::Dimension);
}

#[test]
fn unresolvable_value_reference_yields_one_diagnostic() {
    let mut f = fixture();
    let setter = f.model.add_method(
        f.view,
        "setTitleSize",
        Visibility::Public,
        SourceLanguage::Java,
        &[f.int_ty],
    );
    f.model.annotate(
        setter,
        Annotation::Attr {
            value: 999, // not in the table
            default_value: -1,
        },
    );
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.errors()[0]
        .message
        .contains("Incorrectly typed @Attr value parameter"));
}

#[test]
fn sentinel_default_value_is_absent() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[int_ty]);
    let mut diagnostics = Diagnostics::new();

    let attr = f.extract(setter, &mut diagnostics).unwrap();
    assert_eq!(attr.default_value_res_id, None);
}

#[test]
fn explicit_default_value_is_resolved() {
    let mut f = fixture();
    let setter = f.model.add_method(
        f.view,
        "setTitleSize",
        Visibility::Public,
        SourceLanguage::Java,
        &[f.int_ty],
    );
    f.model.annotate(
        setter,
        Annotation::Attr {
            value: ATTR_REF,
            default_value: DEFAULT_REF,
        },
    );
    let mut diagnostics = Diagnostics::new();

    let attr = f.extract(setter, &mut diagnostics).unwrap();
    assert_eq!(
        attr.default_value_res_id.map(|id| id.code),
        Some("R.dimen.default_title_size".to_string())
    );
}

#[test]
fn unresolvable_default_value_yields_one_diagnostic() {
    let mut f = fixture();
    let setter = f.model.add_method(
        f.view,
        "setTitleSize",
        Visibility::Public,
        SourceLanguage::Java,
        &[f.int_ty],
    );
    f.model.annotate(
        setter,
        Annotation::Attr {
            value: ATTR_REF,
            default_value: 999,
        },
    );
    let mut diagnostics = Diagnostics::new();

    assert!(f.extract(setter, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.errors()[0]
        .message
        .contains("Incorrectly typed @Attr defaultValue parameter"));
}

#[test]
fn requires_api_prefers_api_over_legacy_value_alias() {
    let mut f = fixture();
    let int_ty = f.int_ty;

    let with_both = f.add_setter("setA", Visibility::Public, &[int_ty]);
    f.model
        .annotate(with_both, Annotation::RequiresApi { api: 21, value: 5 });

    let with_value_only = f.add_setter("setB", Visibility::Public, &[int_ty]);
    f.model
        .annotate(with_value_only, Annotation::RequiresApi { api: 1, value: 5 });

    let without = f.add_setter("setC", Visibility::Public, &[int_ty]);

    let mut diagnostics = Diagnostics::new();
    assert_eq!(f.extract(with_both, &mut diagnostics).unwrap().requires_api, 21);
    assert_eq!(
        f.extract(with_value_only, &mut diagnostics)
            .unwrap()
            .requires_api,
        5
    );
    assert_eq!(f.extract(without, &mut diagnostics).unwrap().requires_api, 1);
    assert!(diagnostics.is_empty());
}

#[test]
fn kdoc_truncates_mangled_setter_names() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize$app_debug", Visibility::Public, &[int_ty]);
    let mut diagnostics = Diagnostics::new();

    let attr = f.extract(setter, &mut diagnostics).unwrap();
    assert_eq!(attr.kdoc.as_str(), "@see com.example.MyView.setTitleSize\n");
    assert_eq!(
        attr.javadoc.as_str(),
        "@see com.example.MyView#setTitleSize$app_debug(int)\n"
    );
}

/// Resolver standing in for a scanner that reports its own failures and
/// returns nothing.
struct SilentResolver;

impl ResourceResolver for SilentResolver {
    fn resolve(
        &self,
        _annotation: &str,
        _element: ElementId,
        _raw: i32,
    ) -> Result<Option<ResourceId>, ResourceError> {
        Ok(None)
    }
}

#[test]
fn silent_resolver_miss_yields_no_extra_diagnostic() {
    let mut f = fixture();
    let int_ty = f.int_ty;
    let setter = f.add_setter("setTitleSize", Visibility::Public, &[int_ty]);
    let extractor = AttrExtractor::new(&f.model, &SilentResolver);
    let mut diagnostics = Diagnostics::new();

    let result = extractor.extract(setter, &mut diagnostics).unwrap();
    assert!(result.is_none());
    assert!(diagnostics.is_empty());
}
