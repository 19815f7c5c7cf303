//! Scope analysis.
//!
//! A single traversal over the AST classifies every identifier reference as
//! defined, loop-bound, or undefined. The sets are module-global by design:
//! a name bound anywhere counts as bound everywhere. Destructuring targets,
//! attribute/subscript targets, comprehension-local variables, lambda
//! parameters, and imports do not bind names; uses reachable only through
//! them are flagged. This is a deliberate precision/recall tradeoff.

use crate::issue::{Issue, IssueKind};
use crate::parse::SyntaxTree;
use crate::utils::LineIndex;
use compact_str::CompactString;
use ruff_python_ast::{self as ast, Expr, Stmt};
use ruff_text_size::Ranged;
use rustc_hash::FxHashSet;

/// Definedness policy for undefined-variable reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// A reference is flagged iff it is uncovered at the moment the walk
    /// reaches it. Order-sensitive by construction: forward references are
    /// flagged even when a later assignment binds the name. This rewards
    /// straight-line top-to-bottom definition order.
    SinglePass,
    /// Collect-then-check: a reference is flagged iff it is uncovered by the
    /// final sets, regardless of where the binding appears.
    TwoPhase,
}

/// The three name sets produced by one traversal.
#[derive(Debug, Default, Clone)]
pub struct ScopeSets {
    /// Names bound by a simple assignment target or a function parameter.
    pub defined: FxHashSet<CompactString>,
    /// Names bound as a loop's iteration variable.
    pub loop_bound: FxHashSet<CompactString>,
    /// Names referenced in a value-reading context.
    pub used: FxHashSet<CompactString>,
}

impl ScopeSets {
    /// True when `defined` or `loop_bound` covers the name.
    #[must_use]
    pub fn covers(&self, name: &str) -> bool {
        self.defined.contains(name) || self.loop_bound.contains(name)
    }

    /// Computes `used − defined − loop_bound − builtins`, sorted for
    /// deterministic consumption.
    #[must_use]
    pub fn undefined(&self, builtins: &FxHashSet<CompactString>) -> Vec<CompactString> {
        let mut names: Vec<CompactString> = self
            .used
            .iter()
            .filter(|name| !self.covers(name.as_str()) && !builtins.contains(name.as_str()))
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }
}

/// The result of one scope analysis run.
#[derive(Debug)]
pub struct ScopeAnalysis {
    /// The final name sets.
    pub sets: ScopeSets,
    /// One `UndefinedVariable` issue per uncovered read-context reference,
    /// in traversal order.
    pub issues: Vec<Issue>,
}

/// One recorded read-context reference.
struct ReadRef {
    name: CompactString,
    line: usize,
    covered_at_visit: bool,
}

/// Visitor that populates the scope sets and records read references.
pub struct ScopeAnalyzer<'a> {
    builtins: &'a FxHashSet<CompactString>,
    mode: ScopeMode,
    line_index: &'a LineIndex,
    sets: ScopeSets,
    reads: Vec<ReadRef>,
}

impl<'a> ScopeAnalyzer<'a> {
    /// Creates a new analyzer.
    #[must_use]
    pub fn new(
        builtins: &'a FxHashSet<CompactString>,
        mode: ScopeMode,
        line_index: &'a LineIndex,
    ) -> Self {
        Self {
            builtins,
            mode,
            line_index,
            sets: ScopeSets::default(),
            reads: Vec::new(),
        }
    }

    /// Runs the full analysis over a parsed tree.
    #[must_use]
    pub fn analyze(mut self, tree: &SyntaxTree) -> ScopeAnalysis {
        for stmt in tree.body() {
            self.visit_stmt(stmt);
        }
        self.finish()
    }

    /// Consumes the analyzer and resolves the recorded references into
    /// issues under the configured mode.
    #[must_use]
    pub fn finish(self) -> ScopeAnalysis {
        let Self {
            builtins,
            mode,
            sets,
            reads,
            ..
        } = self;
        let issues = reads
            .into_iter()
            .filter(|r| match mode {
                ScopeMode::SinglePass => !r.covered_at_visit,
                ScopeMode::TwoPhase => {
                    !sets.covers(r.name.as_str()) && !builtins.contains(r.name.as_str())
                }
            })
            .map(|r| {
                Issue::new(
                    IssueKind::UndefinedVariable,
                    format!("Undefined variable '{}'", r.name),
                    r.line,
                )
            })
            .collect();
        ScopeAnalysis { sets, issues }
    }

    fn record_read(&mut self, name: &str, offset: ruff_text_size::TextSize) {
        let covered_at_visit = self.sets.covers(name) || self.builtins.contains(name);
        self.sets.used.insert(CompactString::from(name));
        self.reads.push(ReadRef {
            name: CompactString::from(name),
            line: self.line_index.line_index(offset),
            covered_at_visit,
        });
    }

    fn bind_defined(&mut self, name: &str) {
        self.sets.defined.insert(CompactString::from(name));
    }

    fn bind_parameters(&mut self, parameters: &ast::Parameters) {
        for arg in &parameters.posonlyargs {
            self.bind_defined(arg.parameter.name.as_str());
        }
        for arg in &parameters.args {
            self.bind_defined(arg.parameter.name.as_str());
        }
        if let Some(vararg) = &parameters.vararg {
            self.bind_defined(vararg.name.as_str());
        }
        for arg in &parameters.kwonlyargs {
            self.bind_defined(arg.parameter.name.as_str());
        }
        if let Some(kwarg) = &parameters.kwarg {
            self.bind_defined(kwarg.name.as_str());
        }
    }

    /// Visits a statement node, updating the sets as bindings appear.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                // Defaults evaluate in the enclosing scope, before the
                // parameters exist.
                for arg in node
                    .parameters
                    .posonlyargs
                    .iter()
                    .chain(&node.parameters.args)
                    .chain(&node.parameters.kwonlyargs)
                {
                    if let Some(default) = &arg.default {
                        self.visit_expr(default);
                    }
                }
                self.bind_parameters(&node.parameters);
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::ClassDef(node) => {
                for decorator in &node.decorator_list {
                    self.visit_expr(&decorator.expression);
                }
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::Assign(node) => {
                // Targets are registered before the value is visited, so
                // `x = x + 1` reads a defined `x`.
                for target in &node.targets {
                    if let Expr::Name(name) = target {
                        self.bind_defined(name.id.as_str());
                    }
                }
                self.visit_expr(&node.value);
                for target in &node.targets {
                    if !matches!(target, Expr::Name(_)) {
                        self.visit_expr(target);
                    }
                }
            }
            Stmt::AnnAssign(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.value);
            }
            Stmt::For(node) => {
                if let Expr::Name(name) = node.target.as_ref() {
                    self.sets.loop_bound.insert(CompactString::from(name.id.as_str()));
                }
                self.visit_expr(&node.iter);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
            }
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expr(test);
                    }
                    for s in &clause.body {
                        self.visit_stmt(s);
                    }
                }
            }
            Stmt::Try(node) => {
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for handler in &node.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    if let Some(type_) = &h.type_ {
                        self.visit_expr(type_);
                    }
                    for s in &h.body {
                        self.visit_stmt(s);
                    }
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
                for s in &node.finalbody {
                    self.visit_stmt(s);
                }
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.visit_expr(&item.context_expr);
                }
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::Match(node) => {
                self.visit_expr(&node.subject);
                for case in &node.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    for s in &case.body {
                        self.visit_stmt(s);
                    }
                }
            }
            Stmt::Expr(node) => {
                self.visit_expr(&node.value);
            }
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
            }
            _ => {}
        }
    }

    /// Visits an expression node, recording read-context name references.
    pub fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Name(node) => {
                if matches!(node.ctx, ast::ExprContext::Load) {
                    self.record_read(node.id.as_str(), node.range().start());
                }
            }
            Expr::Call(node) => {
                self.visit_expr(&node.func);
                for arg in &node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for comparator in &node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::If(node) => {
                self.visit_expr(&node.test);
                self.visit_expr(&node.body);
                self.visit_expr(&node.orelse);
            }
            Expr::Named(node) => {
                // The walrus target is a binding construct this analyzer
                // does not model; only the value side is read.
                self.visit_expr(&node.value);
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&item.value);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step);
                }
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Lambda(node) => self.visit_expr(&node.body),
            Expr::ListComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for cond in &gen.ifs {
                        self.visit_expr(cond);
                    }
                }
                self.visit_expr(&node.elt);
            }
            Expr::SetComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for cond in &gen.ifs {
                        self.visit_expr(cond);
                    }
                }
                self.visit_expr(&node.elt);
            }
            Expr::DictComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for cond in &gen.ifs {
                        self.visit_expr(cond);
                    }
                }
                if let Some(key) = &node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&node.value);
            }
            Expr::Generator(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for cond in &gen.ifs {
                        self.visit_expr(cond);
                    }
                }
                self.visit_expr(&node.elt);
            }
            _ => {}
        }
    }
}

/// Convenience wrapper running one analysis over a parsed tree.
#[must_use]
pub fn analyze_tree(
    tree: &SyntaxTree,
    line_index: &LineIndex,
    builtins: &FxHashSet<CompactString>,
    mode: ScopeMode,
) -> ScopeAnalysis {
    ScopeAnalyzer::new(builtins, mode, line_index).analyze(tree)
}
