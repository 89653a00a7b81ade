use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap};
use vortex_dom::{Document, NodeId};

use crate::action::{ActionRegistry, Handler};
use crate::app::AppContext;
use crate::element;
use crate::error::RenderError;
use crate::state::ViewState;
use crate::value::{Child, Children, Props, Value};
use crate::widget::{MountRecord, Widget, WidgetId};

/// The document type the runtime renders into; listeners are [`Handler`]s.
pub type Dom = Document<Handler>;

/// Lifecycle of the runtime. `Unmounted → Mounted` happens once, on the
/// first successful full render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Mounted,
}

struct Instance {
    widget: Rc<dyn Widget>,
    state: ViewState,
    actions: ActionRegistry,
}

// ── Runtime ───────────────────────────────────────────────────────────────

/// Render controller, state container and event dispatcher in one engine.
///
/// Owns the document, every registered widget instance with its view state,
/// and the side table mapping each instance to the node it last produced.
///
/// Updates follow a two-tier policy:
/// - a state change on the root widget clears the mount point and rebuilds
///   the whole tree;
/// - a state change on any other mounted widget rebuilds only that widget
///   and swaps its node in place.
///
/// Nothing is diffed; replacement is unconditional.
pub struct Runtime {
    pub(crate) document: Dom,
    pub(crate) ctx: AppContext,
    widgets: SlotMap<WidgetId, Instance>,
    mounts: SecondaryMap<WidgetId, MountRecord>,
    /// Reverse side table: rendered node → instances whose output it is,
    /// innermost first. A wrapper that returns a nested instance's node
    /// shares that node with it.
    owners: HashMap<NodeId, Vec<WidgetId>>,
    /// Instances currently inside `build`, innermost last.
    building: Vec<WidgetId>,
    pub(crate) root: Option<WidgetId>,
    phase: Phase,
    pub(crate) delegation_installed: bool,
    empty: ViewState,
}

impl Runtime {
    pub fn new(document: Dom, ctx: AppContext) -> Self {
        Self {
            document,
            ctx,
            widgets: SlotMap::with_key(),
            mounts: SecondaryMap::new(),
            owners: HashMap::new(),
            building: Vec::new(),
            root: None,
            phase: Phase::Unmounted,
            delegation_installed: false,
            empty: ViewState::new(),
        }
    }

    pub fn document(&self) -> &Dom {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Dom {
        &mut self.document
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ── instances ─────────────────────────────────────────────────────────

    /// Registers a widget instance with empty view state.
    pub fn create_widget(&mut self, widget: impl Widget) -> WidgetId {
        let actions = widget.actions();
        self.widgets.insert(Instance { widget: Rc::new(widget), state: ViewState::new(), actions })
    }

    /// Registers `widget` and designates it as the full re-render root.
    pub fn create_root(&mut self, widget: impl Widget) -> WidgetId {
        let id = self.create_widget(widget);
        self.root = Some(id);
        id
    }

    /// Designates an existing instance as the root.
    pub fn set_root(&mut self, id: WidgetId) -> Result<(), RenderError> {
        if !self.widgets.contains_key(id) {
            let err = RenderError::UnknownWidget(id);
            log::error!("{err}");
            return Err(err);
        }
        if let Some(previous) = self.root.filter(|&r| r != id) {
            log::warn!("root widget {previous:?} replaced by {id:?}");
        }
        self.root = Some(id);
        Ok(())
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn is_root(&self, id: WidgetId) -> bool {
        self.root == Some(id)
    }

    pub fn state(&self, id: WidgetId) -> Option<&ViewState> {
        self.widgets.get(id).map(|i| &i.state)
    }

    pub fn actions(&self, id: WidgetId) -> Option<&ActionRegistry> {
        self.widgets.get(id).map(|i| &i.actions)
    }

    /// Where `id` was last mounted, if it has been built at all.
    pub fn mount_record(&self, id: WidgetId) -> Option<MountRecord> {
        self.mounts.get(id).copied()
    }

    /// Innermost instance whose rendered node contains `node` (inclusive).
    pub fn owner_of(&self, node: NodeId) -> Option<WidgetId> {
        self.enclosing_widgets(node).into_iter().next()
    }

    /// Every instance whose rendered node contains `node`, innermost first.
    pub fn enclosing_widgets(&self, node: NodeId) -> Vec<WidgetId> {
        self.document
            .ancestors(node)
            .flat_map(|n| {
                self.owners
                    .get(&n)
                    .into_iter()
                    .flatten()
                    .copied()
                    .filter(move |&w| self.mounts.get(w).is_some_and(|m| m.rendered == n))
            })
            .collect()
    }

    // ── state ─────────────────────────────────────────────────────────────

    /// Merges `partial` into the state of `id`, then re-renders.
    ///
    /// Before the first mount only the merge happens. Afterwards the root
    /// triggers a full render and any other instance a localized one. A
    /// failed re-render is logged and returned; the merge is kept either way.
    pub fn set_state(&mut self, id: WidgetId, partial: impl Into<ViewState>) -> Result<(), RenderError> {
        let Some(instance) = self.widgets.get_mut(id) else {
            let err = RenderError::UnknownWidget(id);
            log::error!("state update dropped: {err}");
            return Err(err);
        };
        instance.state.merge(partial.into());

        if self.phase == Phase::Unmounted {
            log::debug!("state of {id:?} merged before first mount");
            return Ok(());
        }
        if self.is_root(id) {
            self.render().map(drop)
        } else {
            self.rerender(id).map(drop)
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Installs delegated event handling, then performs the first full render.
    pub fn start(&mut self) -> Result<NodeId, RenderError> {
        self.install_delegation();
        self.render()
    }

    /// Full render: empties the mount point and mounts a fresh root tree.
    ///
    /// A missing mount point or root aborts before anything is touched.
    pub fn render(&mut self) -> Result<NodeId, RenderError> {
        let result = self.render_root();
        if let Err(err) = &result {
            log::error!("render aborted: {err}");
        }
        result
    }

    fn render_root(&mut self) -> Result<NodeId, RenderError> {
        let root = self.root.ok_or(RenderError::NoRoot)?;
        if !self.widgets.contains_key(root) {
            return Err(RenderError::UnknownWidget(root));
        }
        let selector = self.ctx.mount_selector();
        let mount = self
            .document
            .query_selector(selector)
            .ok_or_else(|| RenderError::MissingMountPoint(selector.to_owned()))?;

        let freed = self.document.clear_children(mount);
        let node = self.build_widget(root)?;
        self.document.append_child(mount, node)?;
        self.sync_side_tables();

        if self.phase == Phase::Unmounted {
            self.phase = Phase::Mounted;
            log::debug!("mounted root {root:?} under `{}`", self.ctx.mount_selector());
        } else {
            log::debug!("full render replaced {freed} nodes");
        }
        Ok(node)
    }

    /// Localized render: rebuilds `id` and swaps its node in place, keeping
    /// the sibling index under the shared parent.
    ///
    /// An instance that was never mounted, or whose node has since been
    /// discarded or detached, cannot be re-rendered; that is a configuration
    /// error.
    pub fn rerender(&mut self, id: WidgetId) -> Result<NodeId, RenderError> {
        let result = self.replace_in_place(id);
        if let Err(err) = &result {
            log::error!("re-render aborted: {err}");
        }
        result
    }

    fn replace_in_place(&mut self, id: WidgetId) -> Result<NodeId, RenderError> {
        if !self.widgets.contains_key(id) {
            return Err(RenderError::UnknownWidget(id));
        }
        let old = self
            .mounts
            .get(id)
            .map(|m| m.rendered)
            .filter(|&n| self.document.contains(n))
            .ok_or(RenderError::DetachedWidget(id))?;
        let parent = self.document.parent(old).ok_or(RenderError::DetachedWidget(id))?;

        let new = self.build_widget(id)?;
        if let Err(err) = self.document.replace_child(parent, new, old) {
            self.document.remove_subtree(new);
            self.record_mount(id, old);
            return Err(err.into());
        }
        // Outer instances that returned the same node now own the new one.
        let sharing: Vec<WidgetId> = self
            .owners
            .get(&old)
            .into_iter()
            .flatten()
            .copied()
            .filter(|&w| w != id && self.mounts.get(w).is_some_and(|m| m.rendered == old))
            .collect();
        for w in sharing {
            self.record_mount(w, new);
        }
        let freed = self.document.remove_subtree(old);
        self.sync_side_tables();
        log::debug!("re-rendered {id:?} in place ({freed} nodes replaced)");
        Ok(new)
    }

    /// Runs `build` on one instance and records its output.
    pub(crate) fn build_widget(&mut self, id: WidgetId) -> Result<NodeId, RenderError> {
        let widget = self
            .widgets
            .get(id)
            .map(|i| Rc::clone(&i.widget))
            .ok_or(RenderError::UnknownWidget(id))?;
        if self.building.contains(&id) {
            return Err(RenderError::Reentrant(id));
        }

        self.building.push(id);
        let node = widget.build(&mut BuildCtx { rt: self, widget: Some(id) });
        self.building.pop();

        self.record_mount(id, node);
        Ok(node)
    }

    fn record_mount(&mut self, id: WidgetId, node: NodeId) {
        let record = MountRecord { rendered: node, parent: self.document.parent(node) };
        if let Some(previous) = self.mounts.insert(id, record) {
            if let Some(owners) = self.owners.get_mut(&previous.rendered) {
                owners.retain(|&w| w != id);
            }
        }
        let owners = self.owners.entry(node).or_default();
        if !owners.contains(&id) {
            owners.push(id);
        }
    }

    /// Drops reverse entries for discarded nodes and refreshes the recorded
    /// parent of every mount.
    fn sync_side_tables(&mut self) {
        let document = &self.document;
        let mounts = &self.mounts;
        self.owners.retain(|n, ws| {
            ws.retain(|&w| mounts.get(w).is_some_and(|m| m.rendered == *n));
            document.contains(*n) && !ws.is_empty()
        });
        for (_, record) in self.mounts.iter_mut() {
            record.parent = self.document.parent(record.rendered);
        }
    }

    /// Runs `f` with a build context that belongs to no instance; for
    /// composing widget-library output outside any widget.
    pub fn compose<R>(&mut self, f: impl FnOnce(&mut BuildCtx<'_>) -> R) -> R {
        f(&mut BuildCtx { rt: self, widget: None })
    }

    /// Calls `handler` with a context bound to `owner`.
    pub(crate) fn invoke(&mut self, handler: &Handler, owner: Option<WidgetId>, event: &vortex_dom::Event) {
        handler(&mut EventCtx { rt: self, owner }, event);
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("phase", &self.phase)
            .field("root", &self.root)
            .field("widgets", &self.widgets.len())
            .field("mount_selector", &self.ctx.mount_selector())
            .finish()
    }
}

// ── BuildCtx ──────────────────────────────────────────────────────────────

/// Context handed to [`Widget::build`] and to every widget-library builder.
pub struct BuildCtx<'a> {
    rt: &'a mut Runtime,
    widget: Option<WidgetId>,
}

impl BuildCtx<'_> {
    pub fn document(&mut self) -> &mut Dom {
        &mut self.rt.document
    }

    /// The instance being built, if any.
    pub fn widget(&self) -> Option<WidgetId> {
        self.widget
    }

    /// View state of the instance being built (empty outside an instance).
    pub fn state(&self) -> &ViewState {
        self.widget
            .and_then(|w| self.rt.widgets.get(w))
            .map_or(&self.rt.empty, |i| &i.state)
    }

    /// Node-builder shortcut.
    pub fn create_element(&mut self, tag: &str, props: &Props, children: &Children) -> NodeId {
        element::create_element(&mut self.rt.document, tag, props, children)
    }

    /// Builds a nested instance and records where its output lives.
    /// Failures are logged and yield `None`.
    pub fn build(&mut self, id: WidgetId) -> Option<NodeId> {
        match self.rt.build_widget(id) {
            Ok(node) => Some(node),
            Err(err) => {
                log::error!("nested widget skipped: {err}");
                None
            }
        }
    }

    /// Resolves a widget-holding slot (`child`, `body`, `home`, …): instances
    /// are built, live nodes pass through, `Null` means absent. Anything else
    /// is a configuration error, logged and skipped.
    pub fn resolve_slot(&mut self, slot: &str, value: &Value) -> Option<NodeId> {
        match value {
            Value::Null => None,
            Value::Widget(id) => self.build(*id),
            Value::Node(n) if self.rt.document.contains(*n) => Some(*n),
            other => {
                log::error!("slot `{slot}` holds {other:?}, which is neither a widget nor a node");
                None
            }
        }
    }

    /// Resolves widget entries of a child list into their nodes, keeping order.
    pub fn resolve_children(&mut self, children: &Children) -> Children {
        match children {
            Children::Text(_) => children.clone(),
            Children::List(list) => Children::List(
                list.iter()
                    .map(|c| match c {
                        Child::Widget(id) => self.build(*id).map_or(Child::Empty, Child::Node),
                        other => other.clone(),
                    })
                    .collect(),
            ),
        }
    }

    /// Frees the prebuilt nodes of a child list that lost to a slot. Nodes
    /// already attached somewhere are left alone.
    pub fn discard(&mut self, children: &Children) {
        let Children::List(list) = children else {
            return;
        };
        let document = &mut self.rt.document;
        let mut freed = 0;
        for child in list {
            if let Child::Node(n) = child {
                if document.contains(*n) && document.parent(*n).is_none() {
                    freed += document.remove_subtree(*n);
                }
            }
        }
        if freed > 0 {
            log::trace!("discarded {freed} unused child nodes");
        }
    }
}

// ── EventCtx ──────────────────────────────────────────────────────────────

/// Context handed to handlers: the runtime plus the instance the handler
/// is bound to (the owning widget, or the root for application actions).
pub struct EventCtx<'a> {
    pub(crate) rt: &'a mut Runtime,
    owner: Option<WidgetId>,
}

impl EventCtx<'_> {
    pub fn owner(&self) -> Option<WidgetId> {
        self.owner
    }

    /// View state of the bound instance.
    pub fn state(&self) -> &ViewState {
        self.owner
            .and_then(|w| self.rt.state(w))
            .unwrap_or(&self.rt.empty)
    }

    /// Merges into the bound instance's state and re-renders. Errors are
    /// already logged by the runtime.
    pub fn set_state(&mut self, partial: impl Into<ViewState>) {
        match self.owner {
            Some(owner) => {
                let _ = self.rt.set_state(owner, partial);
            }
            None => log::error!("state update dropped: {}", RenderError::NoRoot),
        }
    }

    pub fn document(&self) -> &Dom {
        &self.rt.document
    }

    pub fn runtime(&mut self) -> &mut Runtime {
        self.rt
    }
}
