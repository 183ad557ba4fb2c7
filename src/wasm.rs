//! WASM bindings for the graphpaper-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! The frontend constructs a [`Graph`], then calls `step` once per
//! animation frame until it returns false, reading `snapshot` in between
//! to paint.

use wasm_bindgen::prelude::*;

use crate::geometry::Size;
use crate::graph::{self, Edge, Node};
use crate::layout::{LayoutConfig, Relaxation};
use crate::output::{EdgeOutput, GraphOutput, NodeOutput};

#[wasm_bindgen]
extern "C" {
    pub fn alert(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// A generated graph plus its in-flight relaxation state.
#[wasm_bindgen]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    canvas: Size,
    cfg: LayoutConfig,
    relax: Relaxation,
}

#[wasm_bindgen]
impl Graph {
    /// Generate a fresh graph: `count` nodes with base radius
    /// `radius_seed`, randomly connected with density `chance` in [0, 1].
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, radius_seed: f64, chance: f64) -> Result<Graph, JsValue> {
        let cfg = LayoutConfig::default();
        let mut rng = rand::thread_rng();

        let (mut nodes, canvas) =
            graph::generate(count, radius_seed, &cfg, &mut rng).map_err(|e| {
                console_error(&format!("Error generating graph: {}", e));
                JsValue::from_str(&e.to_string())
            })?;
        let edges = graph::link_nodes(&mut nodes, chance, &mut rng).map_err(|e| {
            console_error(&format!("Error linking nodes: {}", e));
            JsValue::from_str(&e.to_string())
        })?;

        let mut relax = Relaxation::new();
        relax.seed(&mut nodes, canvas, &cfg);

        Ok(Graph {
            nodes,
            edges,
            canvas,
            cfg,
            relax,
        })
    }

    /// Rebuild the graph with new parameters. Any in-flight relaxation
    /// state is discarded and reseeded from the fresh layout.
    pub fn regenerate(
        &mut self,
        count: usize,
        radius_seed: f64,
        chance: f64,
    ) -> Result<(), JsValue> {
        *self = Graph::new(count, radius_seed, chance)?;
        Ok(())
    }

    /// Advance the relaxation by one frame. Returns true while nodes are
    /// still in motion; the frontend keeps scheduling animation frames
    /// until this goes false.
    pub fn step(&mut self) -> bool {
        self.relax.step(&mut self.nodes, self.canvas, &self.cfg) > 0
    }

    pub fn settled(&self) -> bool {
        self.relax.settled()
    }

    pub fn width(&self) -> f64 {
        self.canvas.width
    }

    pub fn height(&self) -> f64 {
        self.canvas.height
    }

    /// Current layout as JSON for the canvas renderer.
    pub fn snapshot(&self) -> String {
        let output = GraphOutput {
            nodes: self.nodes.iter().map(NodeOutput::from_node).collect(),
            edges: self.edges.iter().map(EdgeOutput::from_edge).collect(),
            canvas: self.canvas,
            moving: self.relax.moving_indices(),
            settled: self.relax.settled(),
            error: None,
        };
        serde_json::to_string(&output).unwrap()
    }

    /// Index of the node whose bounding box contains (x, y), or -1.
    pub fn node_at(&self, x: f64, y: f64) -> i32 {
        graph::node_at(x, y, &self.nodes)
            .map(|n| n.index as i32)
            .unwrap_or(-1)
    }
}
