use std::cmp::Ordering;

use super::bounding_box::BoundingBox;
use super::ray::Ray;
use super::vector3::Vector3;

// one boundable primitive prepared for tree building
pub struct BvhItem {
    pub primitive: usize,
    pub bounds: BoundingBox,
    pub representative: Vector3,
}

pub enum BvhNode {
    Node(BoundingBox, Box<BvhNode>, Box<BvhNode>),
    Leaf(BoundingBox, usize),
}

impl BvhNode {

    pub fn bounds(&self) -> &BoundingBox {
        match self {
            BvhNode::Node(bounds, _, _) => bounds,
            BvhNode::Leaf(bounds, _) => bounds,
        }
    }
}

pub struct Bvh {
    root: BvhNode,
}

impl Bvh {

    pub fn build(items: Vec<BvhItem>) -> Self {
        assert!(!items.is_empty(), "can not build a bvh over an empty primitive set");
        debug!("building bvh over {} primitives", items.len());

        Bvh {
            root: subdivide(items),
        }
    }

    pub fn root(&self) -> &BvhNode {
        &self.root
    }

    // gathers every primitive whose box the ray touches, nearest-first pruning
    // is left to the hit resolver
    pub fn candidates(&self, ray: &Ray) -> Vec<usize> {
        let mut result = Vec::new();
        collect_candidates(&self.root, ray, &mut result);
        result
    }
}

fn subdivide(mut items: Vec<BvhItem>) -> BvhNode {
    if items.len() == 1 {
        let item = items.remove(0);
        return BvhNode::Leaf(item.bounds, item.primitive);
    }

    let mut bounds = BoundingBox::empty();
    for item in &items {
        bounds.extend(&item.bounds);
    }

    let axis = bounds.longest_axis();
    items.sort_by(|a, b| {
        a.representative.axis(axis).partial_cmp(&b.representative.axis(axis)).unwrap_or(Ordering::Equal)
    });

    // median split, not a cost based one
    let right_items = items.split_off(items.len() / 2);

    BvhNode::Node(bounds, Box::new(subdivide(items)), Box::new(subdivide(right_items)))
}

fn collect_candidates(node: &BvhNode, ray: &Ray, result: &mut Vec<usize>) {
    match node {
        BvhNode::Leaf(bounds, primitive) => {
            if bounds.intersected_by(ray) {
                result.push(*primitive);
            }
        },
        BvhNode::Node(_, left, right) => {
            if left.bounds().intersected_by(ray) {
                collect_candidates(left, ray, result);
            }
            if right.bounds().intersected_by(ray) {
                collect_candidates(right, ray, result);
            }
        },
    }
}
