//! Type-safe index wrappers for mesh elements.
//!
//! All cross-references inside a [`HalfEdgeMesh`](super::HalfEdgeMesh) are
//! indices into the mesh-owned arenas rather than pointers, so vertices,
//! half-edges, and faces can reference each other freely without ownership
//! cycles. Each element kind gets its own wrapper type to prevent mixing
//! a vertex index up with a half-edge index at compile time.
//!
//! The wrappers are generic over the underlying integer ([`MeshIndex`]),
//! letting callers trade memory for capacity: `u16` for small meshes,
//! `u32` (the default) for typical meshes, `u64` for massive ones.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Integer types usable as the backing store for mesh indices.
///
/// The all-ones value of each type is reserved as the invalid/absent
/// sentinel, so the usable range is `0..MAX`.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// Largest representable valid index.
    const MAX: Self;

    /// Sentinel marking an absent reference (e.g. a missing twin).
    const INVALID: Self;

    /// Convert from `usize`, debug-asserting the value fits.
    fn from_usize(v: usize) -> Self;

    /// Widen to `usize`.
    fn to_usize(self) -> usize;

    /// Whether this is a real index rather than the sentinel.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl MeshIndex for u16 {
    const MAX: Self = u16::MAX - 1;
    const INVALID: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} overflows u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: Self = u32::MAX - 1;
    const INVALID: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} overflows u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    const MAX: Self = u64::MAX - 1;
    const INVALID: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// Index of a vertex in the mesh's vertex arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

/// Index of a directed half-edge in the mesh's half-edge arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct HalfEdgeId<I: MeshIndex = u32>(I);

/// Index of a face in the mesh's face arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Wrap a raw arena position.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// The absent-reference sentinel.
            #[inline]
            pub fn invalid() -> Self {
                Self(I::INVALID)
            }

            /// Arena position as `usize`.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// The raw backing value.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }

            /// Whether this references an element (vs. the sentinel).
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl<I: MeshIndex> Default for $name<I> {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(HalfEdgeId, "HE");
impl_index_type!(FaceId, "F");
