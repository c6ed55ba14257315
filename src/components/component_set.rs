use crate::components::{Component, ComponentRegistry};
use crate::data_structures::Signature;
use crate::error::EcsResult;
use paste::paste;

/// A tuple of [Component] types handled together, e.g. to build a system's required [Signature].
pub trait ComponentSet {
	/// Register every type of the set.
	/// Types registered before a failing one stay registered.
	fn register(registry: &mut ComponentRegistry) -> EcsResult<Signature>;

	/// The union of the signatures of every type of the set.
	fn signature(registry: &ComponentRegistry) -> EcsResult<Signature>;
}

impl ComponentSet for () {
	fn register(_: &mut ComponentRegistry) -> EcsResult<Signature> {
		Ok(Signature::new())
	}

	fn signature(_: &ComponentRegistry) -> EcsResult<Signature> {
		Ok(Signature::new())
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        paste! {
            impl<$($t: Component),*> ComponentSet for ($($t,)*) {
                fn register(registry: &mut ComponentRegistry) -> EcsResult<Signature> {
                    registry.ensure_room([$(stringify!($t)),*].len())?;
                    $(let [<$t:lower>] = registry.register::<$t>()?;)*
                    Ok(Signature::new() $(| [<$t:lower>].signature())*)
                }

                fn signature(registry: &ComponentRegistry) -> EcsResult<Signature> {
                    $(let [<$t:lower>] = registry.signature_of::<$t>()?;)*
                    Ok(Signature::new() $(| [<$t:lower>])*)
                }
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
