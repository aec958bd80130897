//! Seed glossary used when no local snapshot exists, and on reset.

use glossary_types::{Collection, TermRecord};

/// Returns the fixed default collection.
pub fn default_collection() -> Collection {
    Collection::from(vec![
        TermRecord::new(
            "class",
            "A reference type that defines the data and behavior of objects.",
        )
        .with_examples(["public class Player { }", "var p = new Player();"])
        .with_link("https://learn.microsoft.com/dotnet/csharp/fundamentals/types/classes"),
        TermRecord::new(
            "struct",
            "A value type, copied on assignment, typically used for small data.",
        )
        .with_examples(["public struct Point { public int X, Y; }"]),
        TermRecord::new(
            "LINQ",
            "Language Integrated Query: query syntax and operators over collections.",
        )
        .with_examples(["nums.Where(n => n > 2).Select(n => n * 2)"])
        .with_link("https://learn.microsoft.com/dotnet/csharp/linq/"),
        TermRecord::new(
            "async/await",
            "Keywords for writing asynchronous methods that return Task.",
        )
        .with_examples(["public async Task<int> LoadAsync() { await Task.Delay(10); return 1; }"]),
        TermRecord::new(
            "delegate",
            "A type that represents references to methods with a given signature.",
        )
        .with_examples([
            "Func<int, int> square = x => x * x;",
            "Action log = () => Console.WriteLine(\"hi\");",
        ]),
        TermRecord::new(
            "yield",
            "Returns elements of an iterator one at a time, resuming where it left off.",
        )
        .with_examples(["yield return item;"]),
        TermRecord::new(
            "reflection",
            "Inspecting and manipulating type information at runtime.",
        )
        .with_examples(["typeof(string).GetMethods()"]),
        TermRecord::new(
            "null-coalescing operator",
            "`??` returns the left operand if it is not null, otherwise the right one.",
        )
        .with_examples(["var name = input ?? \"anonymous\";"]),
    ])
}
