use crate::ast::AstNode;
use crate::ast::DefinitionRef;
use crate::ast::Document;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::NodeId;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::schema::Schema;
use crate::validation::CacheStats;
use crate::validation::DuplicateFragmentPolicy;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use crate::validation::VariableUsage;
use crate::visitor::visit;
use crate::visitor::TypeAwareVisitor;
use crate::visitor::TypeInfo;
use crate::visitor::TypeInfoVisitor;
use crate::visitor::VisitAction;
use std::cell::Cell;
use std::cell::OnceCell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

type MemoTable<T> = RefCell<HashMap<NodeId, Rc<[T]>>>;

/// Shared state for one validation pass over one [`Document`].
///
/// Besides collecting reported errors, the context derives cross-fragment
/// information for rules: which fragments a definition transitively
/// depends on and which variables are referenced through them. Each
/// derivation is computed lazily on first request and memoized by
/// [`NodeId`] for the rest of the pass; the document must not change while
/// a context for it exists (the shared borrow guarantees this).
pub struct ValidationContext<'a> {
    document: &'a Document,
    errors: RefCell<Vec<ValidationError>>,
    fragment_spreads: MemoTable<&'a FragmentSpread>,
    fragments: OnceCell<HashMap<&'a str, &'a FragmentDefinition>>,
    options: ValidationOptions,
    recursive_variable_usages: MemoTable<VariableUsage<'a>>,
    recursively_referenced_fragments: MemoTable<&'a FragmentDefinition>,
    schema: &'a Schema,
    stats: Cell<CacheStats>,
    variable_usages: MemoTable<VariableUsage<'a>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a Document) -> Self {
        Self::with_options(schema, document, ValidationOptions::default())
    }

    pub fn with_options(
        schema: &'a Schema,
        document: &'a Document,
        options: ValidationOptions,
    ) -> Self {
        Self {
            document,
            errors: RefCell::new(vec![]),
            fragment_spreads: RefCell::new(HashMap::new()),
            fragments: OnceCell::new(),
            options,
            recursive_variable_usages: RefCell::new(HashMap::new()),
            recursively_referenced_fragments: RefCell::new(HashMap::new()),
            schema,
            stats: Cell::new(CacheStats::default()),
            variable_usages: RefCell::new(HashMap::new()),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    pub fn report_error(&self, error: ValidationError) {
        log::trace!("[{}] {}", error.rule(), error.message());
        self.errors.borrow_mut().push(error);
    }

    /// A snapshot of the errors reported so far.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.errors.borrow().clone()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors.into_inner()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats.get()
    }

    /// Looks up a fragment definition by name.
    ///
    /// The name table is built on first use. When the document defines a
    /// name more than once, [`DuplicateFragmentPolicy`] decides which
    /// definition is returned.
    pub fn fragment(&self, name: &str) -> Option<&'a FragmentDefinition> {
        self.fragments.get_or_init(|| self.build_fragment_table()).get(name).copied()
    }

    /// Whether `definition` is its own variable-scoping root.
    pub fn is_independent(&self, definition: DefinitionRef<'a>) -> bool {
        definition.is_independent()
    }

    /// Every fragment spread within `selection_set`, at any depth (including
    /// within inline fragments and field sub-selections).
    ///
    /// Spreads directly within a selection set come before those of its
    /// nested selection sets, and nested sets are expanded last-first.
    pub fn fragment_spreads(&self, selection_set: &'a SelectionSet) -> Rc<[&'a FragmentSpread]> {
        if let Some(cached) = self.fragment_spreads.borrow().get(&selection_set.id) {
            return Rc::clone(cached);
        }

        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                if let Selection::FragmentSpread(spread) = selection {
                    spreads.push(spread);
                } else if let Some(nested_set) = selection.selection_set() {
                    sets_to_visit.push(nested_set);
                }
            }
        }

        self.bump_stats(|stats| stats.fragment_spreads_computed += 1);
        log::trace!(
            "Collected {} fragment spread(s) under selection set {}.",
            spreads.len(),
            selection_set.id,
        );
        let spreads: Rc<[&'a FragmentSpread]> = spreads.into();
        self.fragment_spreads.borrow_mut().insert(selection_set.id, Rc::clone(&spreads));
        spreads
    }

    /// The fragments `definition` depends on through fragment spreads,
    /// transitively, each listed once in the order it was discovered.
    ///
    /// Expansion stops at independent fragments (which are excluded) and at
    /// spreads of fragment names the document does not define. Each name is
    /// only ever expanded once, so cyclic spreads terminate.
    pub fn recursively_referenced_fragments(
        &self,
        definition: DefinitionRef<'a>,
    ) -> Rc<[&'a FragmentDefinition]> {
        let key = definition.id();
        if let Some(cached) = self.recursively_referenced_fragments.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let mut fragments = vec![];
        let mut collected_names = HashSet::new();
        let mut sets_to_visit = vec![definition.selection_set()];
        while let Some(set) = sets_to_visit.pop() {
            for &spread in self.fragment_spreads(set).iter() {
                let fragment_name = spread.fragment_name.as_str();
                if !collected_names.insert(fragment_name) {
                    continue;
                }
                if let Some(fragment) = self.fragment(fragment_name)
                    && !self.is_independent(fragment.into()) {
                    fragments.push(fragment);
                    sets_to_visit.push(&fragment.selection_set);
                }
            }
        }

        self.bump_stats(|stats| stats.recursively_referenced_fragments_computed += 1);
        log::trace!(
            "{} references {} fragment(s) recursively.",
            describe_definition(definition),
            fragments.len(),
        );
        let fragments: Rc<[&'a FragmentDefinition]> = fragments.into();
        self.recursively_referenced_fragments.borrow_mut().insert(key, Rc::clone(&fragments));
        fragments
    }

    /// Every variable reference within `definition` itself (not following
    /// fragment spreads), in traversal order, with the type information
    /// available at each reference.
    ///
    /// Variable definitions are declarations rather than usages and are not
    /// descended into.
    pub fn variable_usages(&self, definition: DefinitionRef<'a>) -> Rc<[VariableUsage<'a>]> {
        let key = definition.id();
        if let Some(cached) = self.variable_usages.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let mut type_info = TypeInfo::new(self.schema);
        let mut visitor = TypeInfoVisitor::new(
            &mut type_info,
            VariableUsageCollector { usages: vec![] },
        );
        visit(definition.as_ast_node(), &mut visitor);
        let usages = visitor.into_inner().usages;

        self.bump_stats(|stats| stats.variable_usages_computed += 1);
        log::trace!(
            "{} contains {} variable usage(s).",
            describe_definition(definition),
            usages.len(),
        );
        let usages: Rc<[VariableUsage<'a>]> = usages.into();
        self.variable_usages.borrow_mut().insert(key, Rc::clone(&usages));
        usages
    }

    /// The usages of `definition` followed by the usages of each fragment in
    /// [`Self::recursively_referenced_fragments()`], in that order.
    ///
    /// A fragment reachable along several spread paths contributes its
    /// usages once.
    pub fn recursive_variable_usages(
        &self,
        definition: DefinitionRef<'a>,
    ) -> Rc<[VariableUsage<'a>]> {
        let key = definition.id();
        if let Some(cached) = self.recursive_variable_usages.borrow().get(&key) {
            return Rc::clone(cached);
        }

        let mut usages = self.variable_usages(definition).to_vec();
        for fragment in self.recursively_referenced_fragments(definition).iter() {
            usages.extend_from_slice(&self.variable_usages(DefinitionRef::Fragment(fragment)));
        }

        self.bump_stats(|stats| stats.recursive_variable_usages_computed += 1);
        let usages: Rc<[VariableUsage<'a>]> = usages.into();
        self.recursive_variable_usages.borrow_mut().insert(key, Rc::clone(&usages));
        usages
    }

    fn build_fragment_table(&self) -> HashMap<&'a str, &'a FragmentDefinition> {
        let mut table = HashMap::new();
        for fragment in self.document.fragments() {
            let name = fragment.name.as_str();
            match self.options.duplicate_fragment_policy {
                DuplicateFragmentPolicy::KeepFirst => {
                    table.entry(name).or_insert(fragment);
                },
                DuplicateFragmentPolicy::KeepLast => {
                    table.insert(name, fragment);
                },
            }
        }

        self.bump_stats(|stats| stats.fragment_table_builds += 1);
        log::debug!("Indexed {} fragment name(s).", table.len());
        table
    }

    fn bump_stats(&self, update: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}

fn describe_definition(definition: DefinitionRef<'_>) -> String {
    match definition {
        DefinitionRef::Fragment(frag) => format!("fragment {}", frag.name),
        DefinitionRef::Operation(op) => match &op.name {
            Some(name) => format!("{} {name}", op.operation_kind),
            None => format!("anonymous {}", op.operation_kind),
        },
    }
}

struct VariableUsageCollector<'a> {
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> TypeAwareVisitor<'a> for VariableUsageCollector<'a> {
    fn enter(&mut self, node: AstNode<'a>, type_info: &TypeInfo<'a>) -> VisitAction {
        match node {
            AstNode::VariableDefinition(_) => VisitAction::Skip,
            AstNode::Variable(var) => {
                self.usages.push(VariableUsage {
                    node: var,
                    input_type: type_info.input_type().cloned(),
                    default_value: type_info.default_value(),
                });
                VisitAction::Continue
            },
            _ => VisitAction::Continue,
        }
    }
}
