use crate::render::Stage;

pub fn use_effect(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Side Effects with `useEffect`");
    if simple {
        stage.bullets(&[
            "Effects run after React has updated the screen",
            "Use them to talk to things outside React: timers, subscriptions, the network",
            "The dependency array says when to run again",
        ]);
        stage.code("useEffect(() => {\n  document.title = `Clicked ${count} times`;\n}, [count]);");
    } else {
        stage.code_with(
            "useEffect(() => {\n  \
               const id = setInterval(tick, 1000);\n  \
               return () => clearInterval(id); // cleanup\n\
             }, []);",
            "jsx",
            &[3],
        );
        stage.deep_dive(
            "Cleanup runs before the next effect and on unmount. In development Strict Mode \
             mounts, unmounts and remounts once to prove the cleanup is symmetric.",
        );
    }
}

pub fn context(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Context");
    if simple {
        stage.bullets(&[
            "Context passes data deep into the tree without threading props",
            "Good for the theme, the signed-in user, the current locale",
        ]);
        stage.code(
            "const ThemeContext = createContext(\"light\");\n\n\
             <ThemeContext.Provider value=\"dark\">\n  <Toolbar />\n</ThemeContext.Provider>\n\n\
             const theme = useContext(ThemeContext);",
        );
    } else {
        stage.bullets(&[
            "Every consumer re-renders when the provider's `value` changes identity",
            "Memoize object values: `useMemo(() => ({ user, logout }), [user])`",
            "Split fast-changing and slow-changing data into separate contexts",
        ]);
        stage.deep_dive("Context is a dependency-injection channel, not a state manager.");
    }
}

pub fn refs(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Refs with `useRef`");
    if simple {
        stage.bullets_beside_code(
            &[
                "A ref holds a value that survives renders without causing one",
                "Attach it to an element to reach the DOM node",
            ],
            "const inputRef = useRef(null);\n\n\
             <input ref={inputRef} />\n\
             <button onClick={() => inputRef.current.focus()}>\n  Focus\n</button>",
        );
    } else {
        stage.bullets(&[
            "`ref.current` is mutable and read outside rendering; never read it during render",
            "Store timer ids, previous values or imperative handles in refs",
            "React 19 passes `ref` as a regular prop to function components",
        ]);
    }
}

pub fn performance(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Performance");
    if simple {
        stage.bullets(&[
            "Measure first with the React DevTools profiler",
            "`memo` skips re-rendering a component whose props did not change",
            "`useMemo` caches a value; `useCallback` caches a function",
        ]);
    } else {
        stage.code_with(
            "const Row = memo(function Row({ item, onSelect }) { ... });\n\n\
             const sorted = useMemo(() => sortBy(items, key), [items, key]);\n\
             const onSelect = useCallback(id => setSelected(id), []);",
            "jsx",
            &[1],
        );
        stage.deep_dive(
            "`memo` compares props shallowly, so a new object or arrow function on every render \
             defeats it. Stable references from `useMemo`/`useCallback` are what make it work.",
        );
    }
}

pub fn custom_hooks(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Custom Hooks");
    if simple {
        stage.bullets(&[
            "A custom hook is a function starting with `use` that calls other hooks",
            "It shares logic, not state: each caller gets its own copy",
        ]);
        stage.code(
            "function useToggle(initial = false) {\n  \
               const [on, setOn] = useState(initial);\n  \
               return [on, () => setOn(o => !o)];\n\
             }",
        );
    } else {
        stage.bullets(&[
            "Hooks rely on call order, hence the rules: top level only, never in conditions or loops",
            "Return tuples for positional APIs, objects when callers pick fields",
            "Lint with `eslint-plugin-react-hooks` to enforce the rules",
        ]);
    }
}

pub fn recap(stage: &mut Stage<'_>, simple: bool) {
    stage.heading("Recap");
    if simple {
        stage.bullets(&[
            "Components + props describe the UI",
            "State and events make it interactive",
            "Effects, context and refs connect it to the outside world",
            "Measure before optimizing",
        ]);
    } else {
        stage.bullets(&[
            "Keep render pure; put side effects in handlers or effects",
            "Derive values instead of duplicating them in state",
            "Give list items stable keys and keep element types stable",
            "Reach for context and memoization deliberately",
        ]);
    }
    stage.callout("Next step: build something small and ship it.");
}
