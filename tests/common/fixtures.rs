//! Reusable drawing stores

use dbinspect::domain::entities::Value;
use dbinspect::domain::value_objects::ObjectId;
use dbinspect::MemoryStore;

pub const NOD: u64 = 1;
pub const LAYER_TABLE: u64 = 2;
pub const LAYER0: u64 = 3;
pub const LINE: u64 = 4;
pub const BLOCK_TABLE: u64 = 5;
pub const LAYER_REGISTRY: u64 = 6;
pub const MODEL_SPACE: u64 = 7;
pub const SOLID: u64 = 8;

pub fn id(raw: u64) -> ObjectId {
    ObjectId::new(raw)
}

/// A drawing with one layer, one line and one solid:
///
/// ```text
/// NOD(1) { "Layers": 6 }          LayerTable(2) [3]      BlockTable(5) [7]
///   Dictionary(6) { "Layer0": 3 }   Layer0(3)              *Model_Space(7)
///                                                            Line(4), Solid3d(8)
/// ```
pub fn drawing() -> MemoryStore {
    let mut store = MemoryStore::new();

    let nod = store
        .record("DBDictionary")
        .entry("Layers", id(LAYER_REGISTRY))
        .hard_owns(id(LAYER_REGISTRY));
    store.insert_at(NOD, nod);

    let registry = store.record("DBDictionary").entry("Layer0", id(LAYER0));
    store.insert_at(LAYER_REGISTRY, registry);

    let layers = store
        .record("LayerTable")
        .entries(vec![id(LAYER0)])
        .hard_owns(id(LAYER0));
    store.insert_at(LAYER_TABLE, layers);

    let layer0 = store
        .record("LayerTableRecord")
        .declared("SymbolTableRecord", "Name", "Layer0")
        .field("IsFrozen", false);
    store.insert_at(LAYER0, layer0);

    let blocks = store
        .record("BlockTable")
        .entries(vec![id(MODEL_SPACE)])
        .hard_owns(id(MODEL_SPACE));
    store.insert_at(BLOCK_TABLE, blocks);

    let model_space = store
        .record("BlockTableRecord")
        .declared("SymbolTableRecord", "Name", "*Model_Space")
        .hard_owns(id(LINE))
        .hard_owns(id(SOLID));
    store.insert_at(MODEL_SPACE, model_space);

    let line = store
        .record("Line")
        .declared("DBObject", "Owner", Value::Id(id(LINE)))
        .declared("Entity", "Layer", "Layer0")
        .declared("Entity", "LayerId", Value::Id(id(LAYER0)))
        .failing("Secret", "permission denied")
        .field("Length", 2.5)
        .field("Tags", Value::list("StringCollection", vec![]))
        .soft_points_to(id(LAYER0));
    store.insert_at(LINE, line);

    let solid = store
        .record("Solid3d")
        .declared("Entity", "LayerId", Value::Id(id(LAYER0)))
        .soft_points_to(id(LAYER0));
    store.insert_at(SOLID, solid);
    let edges: Vec<_> = (0..3).map(|i| store.record("Edge").field("Index", i as i64)).collect();
    let boundary = store.record("BoundaryLoop").nested_list("Edges", "BrepEdgeCollection", edges);
    let face = store.record("Face").nested_list("Loops", "BrepLoopCollection", vec![boundary]);
    let shell = store.record("Shell").nested_list("Faces", "BrepFaceCollection", vec![face]);
    let complex = store.record("Complex").nested_list("Shells", "BrepShellCollection", vec![shell]);
    let brep = store
        .record("Brep")
        .field("IsValid", true)
        .nested_list("Complexes", "BrepComplexCollection", vec![complex]);
    store.set_boundary_representation(id(SOLID), brep);

    store.set_named_registry(id(NOD));
    store.add_root(id(LAYER_TABLE));
    store.add_root(id(BLOCK_TABLE));
    store
}

/// The layer part of `drawing()`, as a JSON document
pub const LAYERS_JSON: &str = r#"{
    "named_registry": 1,
    "roots": [2],
    "records": [
        { "id": 1, "class": "DBDictionary", "dictionary": [["Layers", 6]],
          "references": { "hard_ownership": [6] } },
        { "id": 6, "class": "DBDictionary", "dictionary": [["Layer0", 3]] },
        { "id": 2, "class": "LayerTable", "entries": [3],
          "references": { "hard_ownership": [3] } },
        { "id": 3, "class": "LayerTableRecord",
          "fields": [{ "name": "Name", "declared_by": "SymbolTableRecord", "value": { "text": "Layer0" } }] }
    ]
}"#;
