// ── Root state assembly ──
//
// Combines the per-resource slices under their keys and routes every
// root action to the reducer of the slice it belongs to.

use serde::Serialize;

use catalogo_api::{Category, Customer, Product, Resource};

use crate::slice::{self, SliceAction, SliceState};

/// The whole catalog state, one slice per resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub cliente: SliceState<Customer>,
    pub categoria: SliceState<Category>,
    pub produto: SliceState<Product>,
}

/// An action addressed to one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum RootAction {
    Cliente(SliceAction<Customer>),
    Categoria(SliceAction<Category>),
    Produto(SliceAction<Product>),
}

/// A resource that owns a slice of [`RootState`].
pub trait Sliced: Resource {
    /// Key of the slice inside the root state.
    const KEY: &'static str;

    /// Borrow this resource's slice.
    fn slice(state: &RootState) -> &SliceState<Self>;

    /// Address a slice action to this resource's slice.
    fn wrap(action: SliceAction<Self>) -> RootAction;
}

impl Sliced for Customer {
    const KEY: &'static str = "cliente";

    fn slice(state: &RootState) -> &SliceState<Self> {
        &state.cliente
    }

    fn wrap(action: SliceAction<Self>) -> RootAction {
        RootAction::Cliente(action)
    }
}

impl Sliced for Category {
    const KEY: &'static str = "categoria";

    fn slice(state: &RootState) -> &SliceState<Self> {
        &state.categoria
    }

    fn wrap(action: SliceAction<Self>) -> RootAction {
        RootAction::Categoria(action)
    }
}

impl Sliced for Product {
    const KEY: &'static str = "produto";

    fn slice(state: &RootState) -> &SliceState<Self> {
        &state.produto
    }

    fn wrap(action: SliceAction<Self>) -> RootAction {
        RootAction::Produto(action)
    }
}

/// Root reducer. Slices never see each other's actions.
pub fn reduce(state: &mut RootState, action: RootAction) {
    match action {
        RootAction::Cliente(action) => slice::reduce(&mut state.cliente, action),
        RootAction::Categoria(action) => slice::reduce(&mut state.categoria, action),
        RootAction::Produto(action) => slice::reduce(&mut state.produto, action),
    }
}
