use crate::model::zone::{ZoneId, ZoneResolution};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// distinct zones visited by a route, in order of first appearance.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneSequence(Vec<ZoneResolution>);

/// two adjacent entries of a [`ZoneSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneHop<'a> {
    pub src: &'a ZoneResolution,
    pub dst: &'a ZoneResolution,
}

impl ZoneHop<'_> {
    /// the (source, destination) zone ids, None if either end is unresolved.
    pub fn zone_ids(&self) -> Option<(ZoneId, ZoneId)> {
        Some((self.src.zone_id()?, self.dst.zone_id()?))
    }
}

impl ZoneSequence {
    pub fn new(zones: Vec<ZoneResolution>) -> ZoneSequence {
        ZoneSequence(zones)
    }

    /// consecutive pairs (seq[i], seq[i+1]). empty for sequences shorter than two.
    pub fn hops(&self) -> impl Iterator<Item = ZoneHop<'_>> + '_ {
        self.0
            .iter()
            .tuple_windows()
            .map(|(src, dst)| ZoneHop { src, dst })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneResolution> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_unresolved(&self) -> bool {
        self.0.iter().any(|z| !z.is_resolved())
    }
}

impl FromIterator<ZoneResolution> for ZoneSequence {
    fn from_iter<I: IntoIterator<Item = ZoneResolution>>(iter: I) -> Self {
        ZoneSequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(id: u32) -> ZoneResolution {
        ZoneResolution::Resolved {
            zone_id: ZoneId(id),
            zone_name: format!("ward {id}"),
        }
    }

    #[test]
    fn test_hops() {
        let seq = ZoneSequence::new(vec![resolved(1), ZoneResolution::Unresolved, resolved(3)]);
        let hops = seq.hops().map(|h| h.zone_ids()).collect_vec();
        assert_eq!(hops, vec![None, None]);

        let seq = ZoneSequence::new(vec![resolved(1), resolved(2), resolved(3)]);
        let hops = seq.hops().map(|h| h.zone_ids()).collect_vec();
        assert_eq!(
            hops,
            vec![
                Some((ZoneId(1), ZoneId(2))),
                Some((ZoneId(2), ZoneId(3)))
            ]
        );
    }

    #[test]
    fn test_short_sequences_have_no_hops() {
        assert_eq!(ZoneSequence::default().hops().count(), 0);
        assert_eq!(ZoneSequence::new(vec![resolved(1)]).hops().count(), 0);
    }
}
