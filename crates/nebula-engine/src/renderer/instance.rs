use bytemuck::{Pod, Zeroable};

/// One star as painted this frame: 5 floats = 20 bytes stride.
///
/// Hosts that render from linear memory read these through
/// `StarBuffer::instances_ptr`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    /// X position in CSS pixels.
    pub x: f32,
    /// Y position in CSS pixels.
    pub y: f32,
    /// Painted radius (base radius scaled by depth).
    pub radius: f32,
    /// Fill opacity (0.5 for the farthest stars, up to 1.15 for the nearest).
    pub alpha: f32,
    /// 1.0 when the star gets the glow repaint this frame, else 0.0.
    pub twinkle: f32,
}

impl StarInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn is_twinkling(&self) -> bool {
        self.twinkle > 0.5
    }
}

/// Star instances for the current frame.
pub struct StarBuffer {
    pub instances: Vec<StarInstance>,
}

impl StarBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(420),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: StarInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JS linear memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Flat float view, `FLOATS` per instance.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for StarBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_instance_is_5_floats() {
        assert_eq!(std::mem::size_of::<StarInstance>(), StarInstance::STRIDE_BYTES);
        assert_eq!(StarInstance::FLOATS, 5);
    }

    #[test]
    fn flat_view_matches_fields() {
        let mut buf = StarBuffer::new();
        buf.push(StarInstance { x: 1.0, y: 2.0, radius: 3.0, alpha: 0.5, twinkle: 1.0 });
        buf.push(StarInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(&buf.as_floats()[..5], &[1.0, 2.0, 3.0, 0.5, 1.0]);
        assert_eq!(buf.as_floats().len(), 10);
        assert!(buf.instances[0].is_twinkling());
        assert!(!buf.instances[1].is_twinkling());
    }
}
