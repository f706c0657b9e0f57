use crate::render::Stage;

pub fn intro(stage: &mut Stage<'_>, simple: bool) {
    stage.title_card(
        "React Zero to Hero",
        "From your first component to production-grade patterns",
    );
    if simple {
        stage.callout("Use \u{2190} \u{2192} to move between slides. Press `M` to switch to advanced mode.");
    } else {
        stage.deep_dive(
            "Advanced mode adds internals: how React schedules renders, why rules exist, \
             and what the compiler does with your JSX.",
        );
    }
}

pub fn why_react(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Why React?");
    if simple {
        stage.bullets(&[
            "Build UIs out of small, reusable pieces called components",
            "Describe what the screen should look like; React updates the page for you",
            "Huge ecosystem: routing, data fetching, testing, native apps",
        ]);
        stage.callout("Think of a component as a function from data to UI.");
    } else {
        stage.bullets(&[
            "Declarative rendering: `UI = f(state)`; React diffs the result against the previous tree",
            "Reconciliation walks the element tree and commits the minimal set of DOM mutations",
            "Rendering is split into a pure render phase and a side-effecting commit phase",
            "Concurrent features let React pause, resume and discard render work",
        ]);
        stage.deep_dive(
            "Because render must be pure, React may call your component more than once. \
             Strict Mode does exactly that in development to surface impure code.",
        );
    }
}

pub fn jsx(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("JSX");
    if simple {
        stage.bullets(&[
            "JSX looks like HTML but lives inside JavaScript",
            "Use `{ }` to drop any JavaScript expression into the markup",
            "Use `className` instead of `class`",
        ]);
        stage.code(
            "const name = \"Ada\";\n\
             const greeting = <h1 className=\"title\">Hello, {name}!</h1>;",
        );
    } else {
        stage.bullets(&[
            "JSX compiles to plain function calls; there is no template language",
            "Since React 17 the automatic runtime imports `jsx()` for you",
            "A component must return a single root; use fragments `<>...</>` to group",
        ]);
        stage.code(
            "// <h1 className=\"title\">Hello, {name}!</h1>\n\
             // compiles to:\n\
             import { jsx as _jsx } from \"react/jsx-runtime\";\n\
             _jsx(\"h1\", { className: \"title\", children: [\"Hello, \", name, \"!\"] });",
        );
    }
}

pub fn components(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Components");
    if simple {
        stage.bullets_beside_code(
            &[
                "A component is a function that returns JSX",
                "Names start with a capital letter",
                "Use it like a tag: `<Welcome />`",
            ],
            "function Welcome() {\n  return <p>Welcome aboard!</p>;\n}\n\n\
             function App() {\n  return (\n    <main>\n      <Welcome />\n      <Welcome />\n    </main>\n  );\n}",
        );
    } else {
        stage.bullets_beside_code(
            &[
                "Lowercase tags become DOM elements; capitalized ones are component references",
                "Each `<Welcome />` creates its own instance with its own state",
                "Composition beats inheritance: pass components as `children`",
            ],
            "function Card({ children }) {\n  return <section className=\"card\">{children}</section>;\n}\n\n\
             function App() {\n  return (\n    <Card>\n      <h2>Composed</h2>\n      <Welcome />\n    </Card>\n  );\n}",
        );
    }
}

pub fn props(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Props");
    if simple {
        stage.bullets(&[
            "Props are the inputs of a component, passed like HTML attributes",
            "They flow one way: parent to child",
            "A component never changes its own props",
        ]);
        stage.code(
            "function Greeting({ name }) {\n  return <p>Hi, {name}!</p>;\n}\n\n<Greeting name=\"Grace\" />",
        );
    } else {
        stage.code_with(
            "function Avatar({ user, size = 64, ...rest }) {\n  \
               return <img src={user.url} width={size} height={size} {...rest} />;\n\
             }\n\n\
             <Avatar user={me} alt=\"Me\" loading=\"lazy\" />",
            "jsx",
            &[1],
        );
        stage.deep_dive(
            "Props are a frozen object in development. Default values via destructuring replace \
             `defaultProps`, and spreading `...rest` forwards unknown attributes to the DOM.",
        );
    }
}
