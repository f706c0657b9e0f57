use crate::render::Stage;

pub fn use_state(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("State with `useState`");
    if simple {
        stage.bullets(&[
            "State is data a component remembers between renders",
            "`useState` gives you the current value and a setter",
            "Calling the setter re-renders the component",
        ]);
        stage.code("const [count, setCount] = useState(0);\n<button onClick={() => setCount(count + 1)}>+1</button>");
    } else {
        stage.code_with(
            "const [count, setCount] = useState(0);\n\n\
             function addThree() {\n  \
               setCount(c => c + 1); // updater form reads the latest value\n  \
               setCount(c => c + 1);\n  \
               setCount(c => c + 1);\n\
             }",
            "jsx",
            &[4, 5, 6],
        );
        stage.deep_dive(
            "Updates are batched and applied on the next render. `setCount(count + 1)` three times \
             adds one, because every call sees the same snapshot.",
        );
    }
    stage.counter("count", "count");
}

pub fn events(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Handling Events");
    if simple {
        stage.bullets(&[
            "Pass a function to `onClick`, `onChange`, `onSubmit`, ...",
            "Pass the function itself, do not call it: `onClick={save}`",
            "Inline arrows work too: `onClick={() => save(id)}`",
        ]);
    } else {
        stage.bullets_beside_code(
            &[
                "Handlers receive a synthetic event wrapping the native one",
                "React attaches listeners at the root and dispatches by tree position",
                "Call `e.stopPropagation()` or `e.preventDefault()` as usual",
            ],
            "function Form() {\n  function handleSubmit(e) {\n    e.preventDefault();\n    send();\n  }\n  \
             return <form onSubmit={handleSubmit}>...</form>;\n}",
        );
    }
}

pub fn conditional(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Conditional Rendering");
    if simple {
        stage.bullets(&[
            "Use `if`, `? :` or `&&` to choose what to show",
            "Returning `null` renders nothing",
        ]);
        stage.code("{isLoggedIn ? <Dashboard /> : <Login />}\n{hasAlerts && <AlertBanner />}");
    } else {
        stage.bullets(&[
            "`{count && <Badge />}` renders `0` when count is zero; prefer `count > 0 &&`",
            "Switching element type at the same position unmounts the old subtree and its state",
            "Keep the same type and toggle props when state must survive",
        ]);
    }
    let shown = stage.toggle("details", "Hide details", "Show details");
    if shown {
        stage.callout("Rendered because `showDetails` is true.");
    }
}

pub fn lists(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Lists and Keys");
    if simple {
        stage.code(
            "const todos = [\"Learn JSX\", \"Learn state\", \"Build an app\"];\n\n\
             <ul>\n  {todos.map(todo => <li key={todo}>{todo}</li>)}\n</ul>",
        );
        stage.callout("Every item in a list needs a `key` that is unique among its siblings.");
    } else {
        stage.bullets(&[
            "Keys tell reconciliation which item is which across renders",
            "Index keys break when items are inserted, removed or reordered: state sticks to the wrong row",
            "Use stable ids from your data; generate them when the data is created, not while rendering",
        ]);
        stage.code("{todos.map(todo => <TodoRow key={todo.id} todo={todo} />)}");
    }
}

pub fn forms(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Controlled Forms");
    if simple {
        stage.code(
            "const [name, setName] = useState(\"\");\n\
             <input value={name} onChange={e => setName(e.target.value)} />",
        );
    } else {
        stage.bullets(&[
            "Controlled: React state is the single source of truth for the input",
            "Uncontrolled: the DOM keeps the value; read it through a ref when needed",
            "Switching an input between the two modes triggers a warning",
        ]);
    }
    let name = stage.text_field("name", "Type your name");
    let greeting = if name.trim().is_empty() {
        "Hello, stranger!".to_string()
    } else {
        format!("Hello, {}!", name.trim())
    };
    stage.paragraph(&greeting);
}
