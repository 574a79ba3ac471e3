//! Class catalogue - single-inheritance type hierarchy of the store

use std::collections::{HashMap, HashSet};

/// Class name to parent class and DXF name
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    parents: HashMap<String, String>,
    dxf_names: HashMap<String, String>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `class` as deriving from `parent`
    pub fn define(&mut self, class: impl Into<String>, parent: impl Into<String>) -> &mut Self {
        self.parents.insert(class.into(), parent.into());
        self
    }

    pub fn set_dxf_name(&mut self, class: impl Into<String>, dxf_name: impl Into<String>) -> &mut Self {
        self.dxf_names.insert(class.into(), dxf_name.into());
        self
    }

    pub fn dxf_name(&self, class: &str) -> Option<&str> {
        self.dxf_names.get(class).map(String::as_str)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.parents.contains_key(class) || self.parents.values().any(|p| p == class)
    }

    /// `class` followed by its ancestors, most derived first
    pub fn lineage(&self, class: &str) -> Vec<String> {
        let mut lineage = vec![class.to_string()];
        let mut seen: HashSet<&str> = HashSet::from([class]);
        let mut current = class;
        while let Some(parent) = self.parents.get(current) {
            if !seen.insert(parent.as_str()) {
                break;
            }
            lineage.push(parent.clone());
            current = parent.as_str();
        }
        lineage
    }

    /// Hierarchy of a typical drawing database
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (class, parent) in [
            ("RXObject", "DisposableWrapper"),
            ("Drawable", "RXObject"),
            ("DBObject", "Drawable"),
            ("Entity", "DBObject"),
            ("Curve", "Entity"),
            ("Line", "Curve"),
            ("Arc", "Curve"),
            ("Circle", "Curve"),
            ("Spline", "Curve"),
            ("Polyline", "Curve"),
            ("Polyline2d", "Curve"),
            ("Polyline3d", "Curve"),
            ("Mline", "Entity"),
            ("Hatch", "Entity"),
            ("Solid3d", "Entity"),
            ("Region", "Entity"),
            ("Surface", "Entity"),
            ("BlockReference", "Entity"),
            ("DBText", "Entity"),
            ("Viewport", "Entity"),
            ("SymbolTable", "DBObject"),
            ("BlockTable", "SymbolTable"),
            ("LayerTable", "SymbolTable"),
            ("LinetypeTable", "SymbolTable"),
            ("TextStyleTable", "SymbolTable"),
            ("DimStyleTable", "SymbolTable"),
            ("RegAppTable", "SymbolTable"),
            ("UcsTable", "SymbolTable"),
            ("AbstractViewTable", "SymbolTable"),
            ("ViewTable", "AbstractViewTable"),
            ("ViewportTable", "AbstractViewTable"),
            ("SymbolTableRecord", "DBObject"),
            ("BlockTableRecord", "SymbolTableRecord"),
            ("LayerTableRecord", "SymbolTableRecord"),
            ("LinetypeTableRecord", "SymbolTableRecord"),
            ("TextStyleTableRecord", "SymbolTableRecord"),
            ("DimStyleTableRecord", "SymbolTableRecord"),
            ("RegAppTableRecord", "SymbolTableRecord"),
            ("UcsTableRecord", "SymbolTableRecord"),
            ("AbstractViewTableRecord", "SymbolTableRecord"),
            ("ViewTableRecord", "AbstractViewTableRecord"),
            ("ViewportTableRecord", "AbstractViewTableRecord"),
            ("DBDictionary", "DBObject"),
            ("Xrecord", "DBObject"),
            ("Group", "DBObject"),
            ("PlotSettings", "DBObject"),
            ("Layout", "PlotSettings"),
            ("BrepEntity", "DisposableWrapper"),
            ("Brep", "BrepEntity"),
            ("Complex", "BrepEntity"),
            ("Shell", "BrepEntity"),
            ("Face", "BrepEntity"),
            ("BoundaryLoop", "BrepEntity"),
            ("Edge", "BrepEntity"),
            ("Vertex", "BrepEntity"),
            ("LayerGroup", "LayerFilter"),
        ] {
            catalog.define(class, parent);
        }
        for (class, dxf_name) in [
            ("Line", "LINE"),
            ("Arc", "ARC"),
            ("Circle", "CIRCLE"),
            ("Spline", "SPLINE"),
            ("Polyline", "LWPOLYLINE"),
            ("Polyline2d", "POLYLINE"),
            ("Polyline3d", "POLYLINE"),
            ("Mline", "MLINE"),
            ("Hatch", "HATCH"),
            ("Solid3d", "3DSOLID"),
            ("Region", "REGION"),
            ("Surface", "SURFACE"),
            ("BlockReference", "INSERT"),
            ("DBText", "TEXT"),
            ("Viewport", "VIEWPORT"),
            ("BlockTableRecord", "BLOCK_RECORD"),
            ("LayerTableRecord", "LAYER"),
            ("LinetypeTableRecord", "LTYPE"),
            ("TextStyleTableRecord", "STYLE"),
            ("DimStyleTableRecord", "DIMSTYLE"),
            ("RegAppTableRecord", "APPID"),
            ("UcsTableRecord", "UCS"),
            ("ViewTableRecord", "VIEW"),
            ("ViewportTableRecord", "VPORT"),
            ("DBDictionary", "DICTIONARY"),
            ("Xrecord", "XRECORD"),
            ("Group", "GROUP"),
            ("Layout", "LAYOUT"),
        ] {
            catalog.set_dxf_name(class, dxf_name);
        }
        catalog
    }
}
