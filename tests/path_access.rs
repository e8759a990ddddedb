use vp_core::path::{InvalidPath, Path, PathError, PathErrorKind, ResolvedElement, Segment};
use vp_core::reflect::info::{Primitive, StructBuilder, Type};
use vp_core::reflect::value::{ArrayValue, Object, ObjectPtr, Value};

struct Fixture {
    texture: Type,
    point: Type,
    root: Object,
}

/// `World { A: Layer { B: Point[] }, Texture: Texture*, Handle: Ref<Texture>,
/// Count: i32, Weight: Boxed<f32>, Name: String, Texs: Texture*[],
/// M: Material { Albedo: Ref<Texture> } }` with two points in `A/B` and one
/// null slot in `Texs`.
fn fixture() -> Fixture {
    let texture = StructBuilder::new("Texture")
        .with_field("Width", Primitive::U32)
        .build()
        .unwrap();
    let point = StructBuilder::new("Point")
        .with_field("C", Primitive::F64)
        .build()
        .unwrap();
    let layer = StructBuilder::new("Layer")
        .with_field("B", Type::array(point.clone()))
        .build()
        .unwrap();
    let texture_ptr = Type::pointer(texture.clone()).unwrap();
    let handle = Type::wrapper("Ref<Texture>", texture_ptr.clone());
    let material = StructBuilder::new("Material")
        .with_field("Albedo", handle.clone())
        .build()
        .unwrap();
    let world = StructBuilder::new("World")
        .with_field("A", layer.clone())
        .with_field("Texture", texture_ptr.clone())
        .with_field("Handle", handle)
        .with_field("Count", Primitive::I32)
        .with_field("Weight", Type::wrapper("Boxed<f32>", Primitive::F32.into()))
        .with_field("Name", Primitive::String)
        .with_field("Texs", Type::array(texture_ptr.clone()))
        .with_field("M", material)
        .build()
        .unwrap();

    let mut points = ArrayValue::new(point.clone());
    for c in [1.5, 2.5] {
        let Value::Struct(value) = Value::default_for(&point) else {
            unreachable!()
        };
        assert!(points.push(value.with("C", c)));
    }

    let mut root = Object::new("world", &world).unwrap();
    let Some(Value::Struct(a)) = root.get("A").cloned() else {
        unreachable!()
    };
    assert!(root.set("A", a.with("B", points)));
    assert!(root.set("Texs", ArrayValue::new(texture_ptr).with(Value::Null)));

    Fixture {
        texture,
        point,
        root,
    }
}

fn texture_ptr(fixture: &Fixture, id: &'static str) -> ObjectPtr {
    ObjectPtr::new(Object::new(id, &fixture.texture).unwrap())
}

#[test]
fn textual_round_trip() {
    let path = Path::new()
        .with_attribute("A")
        .with_attribute("B")
        .with_array_element(12)
        .with_attribute("C");
    assert_eq!(path.to_string(), "A/B/12/C");
    assert_eq!(Path::parse(&path.to_string()), path);
}

#[test]
fn empty_path_is_invalid() {
    let mut fixture = fixture();
    for text in ["", "/", "//"] {
        let err = Path::parse(text).resolve(&mut fixture.root).unwrap_err();
        assert_eq!(err, PathError::InvalidPath(InvalidPath::Empty));
    }
}

#[test]
fn missing_first_property_is_invalid() {
    let mut fixture = fixture();
    let err = Path::parse("Nope/B").resolve(&mut fixture.root).unwrap_err();
    assert!(matches!(
        err,
        PathError::InvalidPath(InvalidPath::MissingProperty { segment: 0, ref ty, .. })
            if ty == "World"
    ));
}

#[test]
fn nested_chain_write_is_visible_to_fresh_resolution() {
    let mut fixture = fixture();
    let path = Path::parse("A/B/0/C");

    let mut resolved = path.resolve(&mut fixture.root).unwrap();
    assert_eq!(resolved.len(), 4);
    let elements = resolved.elements();
    assert!(matches!(elements[0], ResolvedElement::Root { .. }));
    assert!(matches!(elements[1], ResolvedElement::Attribute { .. }));
    assert!(matches!(elements[2], ResolvedElement::ArrayElement { index: 0, .. }));
    assert!(matches!(elements[3], ResolvedElement::Attribute { .. }));

    assert_eq!(resolved.value().unwrap(), Value::F64(1.5));
    resolved.set_value(Value::F64(9.0)).unwrap();

    let fresh = path.resolve(&mut fixture.root).unwrap();
    assert_eq!(fresh.value().unwrap(), Value::F64(9.0));
    assert_eq!(
        Path::parse("A/B/1/C").get_value(&fixture.root).unwrap(),
        Value::F64(2.5)
    );
}

#[test]
fn whole_array_element_write() {
    let mut fixture = fixture();
    let Value::Struct(point) = Value::default_for(&fixture.point) else {
        unreachable!()
    };
    let point = point.with("C", 7.0_f64);

    Path::parse("A/B/1")
        .set_value(&mut fixture.root, Value::from(point))
        .unwrap();
    assert_eq!(
        Path::parse("A/B/1/C").get_value(&fixture.root).unwrap(),
        Value::F64(7.0)
    );
}

#[test]
fn out_of_range_write_leaves_root_unmodified() {
    let mut fixture = fixture();
    let before = fixture.root.clone();

    let mut resolved = Path::parse("A/B/2").resolve(&mut fixture.root).unwrap();
    let err = resolved.set_value(Value::Null).unwrap_err();
    assert_eq!(
        err,
        PathError::IndexOutOfRange {
            segment: 2,
            index: 2,
            len: 2
        }
    );
    assert_eq!(resolved.value().unwrap_err().kind(), PathErrorKind::IndexOutOfRange);
    assert_eq!(fixture.root, before);

    // Intermediate slots are checked while resolving.
    let err = Path::parse("A/B/5/C").resolve(&mut fixture.root).unwrap_err();
    assert_eq!(err.kind(), PathErrorKind::IndexOutOfRange);
}

#[test]
fn null_into_pointer_slots() {
    let mut fixture = fixture();
    let ptr = texture_ptr(&fixture, "albedo");

    for field in ["Texture", "Handle"] {
        let path = Path::new().with_attribute(field);
        path.set_value(&mut fixture.root, Value::from(ptr.clone()))
            .unwrap();
        assert_eq!(
            path.get_value(&fixture.root).unwrap(),
            Value::from(ptr.clone())
        );

        path.set_value(&mut fixture.root, Value::Null).unwrap();
        assert!(path.get_value(&fixture.root).unwrap().is_null());
    }
}

#[test]
fn null_into_nested_pointer_slots() {
    let mut fixture = fixture();
    let ptr = texture_ptr(&fixture, "albedo");

    // An array of pointers, and a wrapper of a pointer inside a nested struct.
    for text in ["Texs/0", "M/Albedo"] {
        let path = Path::parse(text);
        path.set_value(&mut fixture.root, Value::from(ptr.clone()))
            .unwrap();
        assert_eq!(
            path.get_value(&fixture.root).unwrap(),
            Value::from(ptr.clone())
        );

        path.set_value(&mut fixture.root, Value::Null).unwrap();
        assert!(path.get_value(&fixture.root).unwrap().is_null());
    }
    assert_eq!(
        Path::parse("Texs").get_value(&fixture.root).unwrap(),
        Value::from(ArrayValue::new(Type::pointer(fixture.texture).unwrap()).with(Value::Null))
    );
}

#[test]
fn null_into_a_value_slot_is_refused() {
    let mut fixture = fixture();
    let before = fixture.root.clone();

    let err = Path::parse("A/B/0/C")
        .set_value(&mut fixture.root, Value::Null)
        .unwrap_err();
    assert_eq!(err, PathError::WriteFailed { segment: 3 });
    assert_eq!(fixture.root, before);
}

#[test]
fn incompatible_value_leaves_root_unmodified() {
    let mut fixture = fixture();
    let before = fixture.root.clone();
    let ptr = texture_ptr(&fixture, "albedo");

    let err = Path::parse("A/B/0/C")
        .set_value(&mut fixture.root, Value::from("not a number"))
        .unwrap_err();
    assert_eq!(
        err,
        PathError::TypeMismatch {
            expected: "f64".into(),
            found: "String".into()
        }
    );

    let err = Path::parse("Count")
        .set_value(&mut fixture.root, Value::from(ptr))
        .unwrap_err();
    assert_eq!(err.kind(), PathErrorKind::TypeMismatch);

    let err = Path::parse("Texture")
        .set_value(&mut fixture.root, Value::I32(1))
        .unwrap_err();
    assert_eq!(err.kind(), PathErrorKind::TypeMismatch);

    assert_eq!(fixture.root, before);
}

#[test]
fn values_are_coerced_to_the_declared_type() {
    let mut fixture = fixture();

    Path::parse("A/B/0/C")
        .set_value(&mut fixture.root, Value::I32(4))
        .unwrap();
    Path::parse("Count")
        .set_value(&mut fixture.root, Value::from(" 12 "))
        .unwrap();
    Path::parse("Weight")
        .set_value(&mut fixture.root, Value::U64(3))
        .unwrap();
    Path::parse("Name")
        .set_value(&mut fixture.root, Value::Bool(false))
        .unwrap();

    let root = &fixture.root;
    assert_eq!(root.get("Count"), Some(&Value::I32(12)));
    assert_eq!(root.get("Weight"), Some(&Value::F32(3.0)));
    assert_eq!(root.get("Name"), Some(&Value::from("false")));
    assert_eq!(
        Path::parse("A/B/0/C").get_value(&fixture.root).unwrap(),
        Value::F64(4.0)
    );
}

#[test]
fn writes_and_reads_are_idempotent() {
    let mut once = fixture();
    let mut twice = fixture();
    let path = Path::parse("A/B/1/C");

    path.set_value(&mut once.root, Value::F64(0.5)).unwrap();
    path.set_value(&mut twice.root, Value::F64(0.5)).unwrap();
    path.set_value(&mut twice.root, Value::F64(0.5)).unwrap();
    assert_eq!(once.root, twice.root);

    let resolved = path.resolve(&mut twice.root).unwrap();
    assert_eq!(resolved.value().unwrap(), resolved.value().unwrap());
}

#[test]
fn resolve_errors() {
    let mut fixture = fixture();

    let err = Path::parse("0/A").resolve(&mut fixture.root).unwrap_err();
    assert_eq!(err, PathError::from(InvalidPath::EmptyContext { segment: 0 }));

    let err = Path::parse("Count/0").resolve(&mut fixture.root).unwrap_err();
    assert_eq!(
        err,
        PathError::from(InvalidPath::NotAnArray {
            segment: 1,
            ty: "i32".into()
        })
    );

    let err = Path::parse("Texture/Width").resolve(&mut fixture.root).unwrap_err();
    assert_eq!(err, PathError::from(InvalidPath::EmptyContext { segment: 1 }));

    let err = Path::parse("A/B/0/D").resolve(&mut fixture.root).unwrap_err();
    assert!(matches!(
        err,
        PathError::InvalidPath(InvalidPath::MissingProperty { segment: 3, .. })
    ));
}

#[test]
fn pointers_are_not_followed_for_writes() {
    let mut fixture = fixture();
    let ptr = texture_ptr(&fixture, "albedo");
    Path::parse("Texture")
        .set_value(&mut fixture.root, Value::from(ptr.clone()))
        .unwrap();

    // Pointees are shared and immutable, so the write is refused.
    let path = Path::parse("Texture/Width");
    assert_eq!(path.get_value(&fixture.root).unwrap(), Value::U32(0));
    assert_eq!(
        path.set_value(&mut fixture.root, Value::U32(64)).unwrap_err().kind(),
        PathErrorKind::WriteFailed
    );
    assert_eq!(ptr.get("Width"), Some(&Value::U32(0)));
}

#[test]
fn slot_metadata() {
    let mut fixture = fixture();

    let resolved = Path::parse("A/B/0").resolve(&mut fixture.root).unwrap();
    assert_eq!(resolved.declared_type().unwrap(), fixture.point);
    assert_eq!(resolved.value_type().unwrap(), Some(fixture.point.clone()));
    assert_eq!(resolved.property().map(|p| p.name()), Some("B"));
    assert_eq!(resolved.root().map(Object::id), Some("world"));

    let resolved = Path::parse("Handle").resolve(&mut fixture.root).unwrap();
    assert_eq!(resolved.declared_type().unwrap().name(), "Ref<Texture>");
    assert_eq!(resolved.value_type().unwrap(), None);
}

#[test]
fn reads_through_a_shared_root() {
    let fixture = fixture();
    let root: &Object = &fixture.root;

    let resolved = Path::parse("A/B/1/C").resolve_ref(root).unwrap();
    let copy = resolved.clone();
    assert_eq!(resolved.value().unwrap(), Value::F64(2.5));
    assert_eq!(copy.value().unwrap(), Value::F64(2.5));
    assert_eq!(copy.root().map(Object::id), Some("world"));

    // Other shared borrows may coexist with a resolved path.
    assert_eq!(Path::parse("Count").get_value(root).unwrap(), Value::I32(0));
    assert_eq!(resolved.declared_type().unwrap().name(), "f64");
}

#[test]
fn structurally_different_namesake_is_refused() {
    let mut fixture = fixture();
    let before = fixture.root.clone();

    // Same name as the real `Point`, different fields.
    let impostor = StructBuilder::new("Point")
        .with_field("D", Primitive::String)
        .build()
        .unwrap();
    let Value::Struct(impostor) = Value::default_for(&impostor) else {
        unreachable!()
    };

    let err = Path::parse("A/B/0")
        .set_value(&mut fixture.root, Value::from(impostor))
        .unwrap_err();
    assert_eq!(err, PathError::WriteFailed { segment: 2 });
    assert_eq!(fixture.root, before);
    assert_eq!(
        Path::parse("A/B/0/C").get_value(&fixture.root).unwrap(),
        Value::F64(1.5)
    );
}

#[test]
fn purely_numeric_names_parse_as_indices() {
    let path = Path::parse("A/007/-1");
    assert_eq!(path[1], Segment::ArrayElement(7));
    assert_eq!(path[2], Segment::Attribute("-1".into()));
}
