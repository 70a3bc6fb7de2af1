use crate::{foundation::names::TypeName, model::param::ParamModel, spec::model::SpecModel};

/// 128-bit digest of a model's derived surface.
///
/// Equal models hash equal; two builds from the same inputs always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ModelFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl std::fmt::Display for ModelFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Two FNV-1a lanes fed the same bytes from different seeds.
struct PairHasher {
    lanes: [u64; 2],
}

impl PairHasher {
    fn new() -> Self {
        Self {
            lanes: [0xcbf2_9ce4_8422_2325, 0x9ae1_6a3b_2f90_404f],
        }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        for lane in &mut self.lanes {
            for &b in bytes {
                *lane ^= u64::from(b);
                *lane = lane.wrapping_mul(FNV_PRIME);
            }
        }
    }

    fn u8(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.bytes(&v.to_le_bytes());
    }

    /// Length-prefixed so adjacent strings cannot run together.
    fn str(&mut self, s: &str) {
        self.u64(s.len() as u64);
        self.bytes(s.as_bytes());
    }

    fn ty(&mut self, t: &TypeName) {
        self.str(t.as_str());
    }

    fn params<'p, P: ParamModel + 'p>(
        &mut self,
        tag: u8,
        items: impl ExactSizeIterator<Item = &'p P>,
    ) {
        self.u8(tag);
        self.u64(items.len() as u64);
        for item in items {
            self.str(item.name());
            self.ty(item.type_name());
        }
    }

    fn finish(self) -> ModelFingerprint {
        let [hi, lo] = self.lanes;
        ModelFingerprint { hi, lo }
    }
}

/// Fingerprint names, final params and method names of `model`.
pub fn fingerprint_model(model: &SpecModel) -> ModelFingerprint {
    let mut h = PairHasher::new();

    h.ty(model.spec_type_name());
    h.ty(model.component_type_name());

    h.params(1, model.props().iter());
    for prop in model.props() {
        h.u8(u8::from(prop.optional));
    }
    h.params(2, model.inject_props().iter());
    h.params(3, model.state_values().iter());
    for state in model.state_values() {
        h.u8(u8::from(state.can_update_lazily));
    }
    h.params(4, model.inter_stage_inputs().iter());
    h.params(5, model.tree_props().iter());
    h.params(6, model.render_data_diffs().iter());

    h.u8(7);
    h.u64(model.event_methods().len() as u64);
    for event in model.event_methods() {
        h.str(&event.name);
        h.ty(&event.event.name);
    }
    h.u64(model.delegate_methods().len() as u64);
    for delegate in model.delegate_methods() {
        h.str(&delegate.name);
    }

    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/spec/fingerprint.rs"]
mod tests;
