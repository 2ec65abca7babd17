use super::{Coordinate, Zone, ZoneIndex, ZoneResolver};
use rstar::{
    primitives::{GeomWithData, Rectangle},
    RTree,
};

type ZoneEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// zone lookup backed by an R-tree over zone bounding boxes.
///
/// the tree only narrows down candidates. candidates are tested in load order
/// so the result matches [`ZoneIndex`] exactly, including on overlapping zones.
pub struct ZoneRTree {
    index: ZoneIndex,
    rtree: RTree<ZoneEnvelope>,
}

impl ZoneRTree {
    pub fn new(index: ZoneIndex) -> ZoneRTree {
        let envelopes = index
            .zones()
            .iter()
            .enumerate()
            .filter_map(|(idx, zone)| {
                zone.bounding_rect().map(|rect| {
                    let min = rect.min();
                    let max = rect.max();
                    GeomWithData::new(Rectangle::from_corners([min.x, min.y], [max.x, max.y]), idx)
                })
            })
            .collect::<Vec<_>>();
        let skipped = index.len() - envelopes.len();
        if skipped > 0 {
            log::warn!("{skipped} zones have empty boundaries and can never be matched");
        }
        ZoneRTree {
            index,
            rtree: RTree::bulk_load(envelopes),
        }
    }

    pub fn index(&self) -> &ZoneIndex {
        &self.index
    }
}

impl From<ZoneIndex> for ZoneRTree {
    fn from(index: ZoneIndex) -> Self {
        ZoneRTree::new(index)
    }
}

impl ZoneResolver for ZoneRTree {
    fn find(&self, coordinate: &Coordinate) -> Option<&Zone> {
        let coord = coordinate.to_coord();
        let mut candidates = self
            .rtree
            .locate_all_at_point(&[coord.x, coord.y])
            .map(|envelope| envelope.data)
            .collect::<Vec<_>>();
        candidates.sort_unstable();
        candidates
            .into_iter()
            .map(|idx| &self.index.zones()[idx])
            .find(|zone| zone.contains(coordinate))
    }
}
