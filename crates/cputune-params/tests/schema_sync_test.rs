//! The built-in schema and the record's field tables must describe the same
//! JSON shape.

use cputune_params::{Bind, FieldInfo, FieldShape, TuneParams};
use cputune_schema::{Schema, SchemaNode, SchemaObject};

fn compare(path: &str, infos: &[FieldInfo], schema: &SchemaObject, problems: &mut Vec<String>) {
    for info in infos {
        let key = format!("{path}.{}", info.key);
        let Some(node) = schema.get(info.key) else {
            problems.push(format!("{key}: bound but missing from schema"));
            continue;
        };
        match (&info.shape, node) {
            (FieldShape::Leaf(tag), SchemaNode::Leaf(schema_tag)) => {
                if tag != schema_tag {
                    problems.push(format!("{key}: record says {tag}, schema says {schema_tag}"));
                }
            }
            (FieldShape::Object(children), SchemaNode::Object(object)) => {
                compare(&key, children, object, problems);
            }
            (FieldShape::Array(children), SchemaNode::Array(Some(element))) => {
                match element.as_object() {
                    Some(object) => compare(&key, children, object, problems),
                    None => problems.push(format!("{key}: schema array element is not an object")),
                }
            }
            (shape, node) => problems.push(format!("{key}: record {shape:?} vs schema {node:?}")),
        }
    }
    for (schema_key, _) in schema.iter() {
        if !infos.iter().any(|info| info.key == schema_key) {
            problems.push(format!("{path}.{schema_key}: in schema but never bound"));
        }
    }
}

#[test]
fn test_schema_matches_field_tables() {
    let tune = Schema::builtin()
        .tune_params()
        .expect("schema declares tune_params");
    let mut problems = Vec::new();
    compare("tune_params", &TuneParams::describe(), tune, &mut problems);
    assert!(problems.is_empty(), "{problems:#?}");
}

#[test]
fn test_flattened_records_expose_base_keys() {
    let infos = TuneParams::describe();
    let vec_costs = infos
        .iter()
        .find(|info| info.key == "vec_costs")
        .expect("vec_costs");
    let FieldShape::Object(vec_fields) = &vec_costs.shape else {
        panic!("vec_costs should be an object");
    };
    let sve = vec_fields.iter().find(|info| info.key == "sve").unwrap();
    let FieldShape::Object(sve_fields) = &sve.shape else {
        panic!("sve should be an object");
    };
    assert!(sve_fields.iter().any(|info| info.key == "int_stmt_cost"));
    assert!(sve_fields.iter().any(|info| info.key == "clast_cost"));
}
