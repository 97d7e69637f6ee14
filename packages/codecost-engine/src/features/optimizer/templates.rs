//! Canned example rewrites
//!
//! Process-wide read-only templates attached to optimizer suggestions. The
//! snippets are illustrative C-family pseudo-code regardless of the input
//! language; they are static text, never generated from the analyzed input.
//! Only the recursion templates are parameterized, by the extracted function
//! name.

/// Placeholder used when function-name extraction fails.
pub const FALLBACK_FUNCTION_NAME: &str = "func";

pub const HASH_MAP_LOOKUP: &str = "// Before: O(n^2) nested scan\nfor (item of items) {\n  for (other of others) {\n    if (other.id === item.id) { match(item, other); }\n  }\n}\n\n// After: O(n) with a hash map\nconst byId = new Map(others.map(o => [o.id, o]));\nfor (item of items) {\n  const other = byId.get(item.id);\n  if (other) { match(item, other); }\n}";

pub const MATRIX_TRAVERSAL: &str = "// Row-major data: keep the inner loop on the contiguous index\nfor (let i = 0; i < rows; i++) {\n  for (let j = 0; j < cols; j++) {\n    sum += matrix[i][j]; // i outer, j inner -> sequential memory access\n  }\n}";

pub const LOOKUP_TABLE: &str = "// Before: repeated O(n) scans\nif (names.includes(a) && names.includes(b)) { ... }\n\n// After: one O(n) build, O(1) checks\nconst nameSet = new Set(names);\nif (nameSet.has(a) && nameSet.has(b)) { ... }";

pub const DEQUE_FRONT_INSERT: &str = "// Before: every front insert shifts the whole array, O(n)\nitems.unshift(next);\n\n// After: a deque makes both ends O(1)\nconst items = new Deque();\nitems.pushFront(next);";

pub const SET_UNIQUE: &str = "// Before: O(n^2) uniqueness by scanning\nconst unique = [];\nfor (x of values) {\n  if (!unique.includes(x)) { unique.push(x); }\n}\n\n// After: O(n) with a set\nconst unique = [...new Set(values)];";

pub const BINARY_SEARCH: &str = "// Sorted input: halve the range instead of scanning\nlet lo = 0, hi = arr.length - 1;\nwhile (lo <= hi) {\n  const mid = (lo + hi) >> 1;\n  if (arr[mid] === target) return mid;\n  if (arr[mid] < target) { lo = mid + 1; } else { hi = mid - 1; }\n}\nreturn -1;";

pub const KMP_SEARCH: &str = "// Repeated substring searches: precompute the failure table once\nconst table = buildFailureTable(pattern); // O(m)\nlet j = 0;\nfor (let i = 0; i < text.length; i++) {\n  while (j > 0 && text[i] !== pattern[j]) { j = table[j - 1]; }\n  if (text[i] === pattern[j] && ++j === pattern.length) { return i - j + 1; }\n}";

pub const EFFICIENT_SORT: &str = "// Before: O(n^2) pairwise swapping\nbubbleSort(arr);\n\n// After: the built-in sort is O(n log n)\narr.sort((a, b) => a - b);";

pub const MERGE_SORT: &str = "// Selection-style passes are O(n^2); divide and conquer is O(n log n)\nfunction mergeSort(arr) {\n  if (arr.length <= 1) return arr;\n  const mid = arr.length >> 1;\n  return merge(mergeSort(arr.slice(0, mid)), mergeSort(arr.slice(mid)));\n}";

pub const STRING_BUILDER: &str = "// Before: each += copies the whole string, O(n^2) total\nlet out = \"\";\nfor (part of parts) { out += part + \",\"; }\n\n// After: collect then join once, O(n)\nconst chunks = [];\nfor (part of parts) { chunks.push(part); }\nconst out = chunks.join(\",\");";

pub const CHAR_ARRAY: &str = "// Character-by-character string edits: work on an array, join once\nconst chars = [];\nfor (let i = 0; i < s.length; i++) {\n  chars.push(transform(s[i]));\n}\nconst result = chars.join(\"\");";

pub const AVOID_COPY: &str = "// Before: a full copy on every call\nconst snapshot = items.slice();\nprocess(snapshot);\n\n// After: pass a view or an index range when the callee does not mutate\nprocess(items, start, end);";

pub const TWO_POINTER: &str = "// Before: O(n) auxiliary array\nconst seen = new Array(n).fill(false);\n\n// After: two pointers over the input, O(1) extra space\nlet left = 0, right = n - 1;\nwhile (left < right) { /* advance the pointers instead of marking */ }";

/// Memoization rewrite, parameterized by the recursive function's name.
pub fn memoization_example(name: &str) -> String {
    format!(
        "const cache = new Map();\nfunction {name}(n) {{\n  if (n <= 1) return n;\n  if (cache.has(n)) return cache.get(n);\n  const result = {name}(n - 1) + {name}(n - 2);\n  cache.set(n, result);\n  return result;\n}}"
    )
}

/// Iterative rewrite for tail-call-shaped recursion.
pub fn iterative_example(name: &str) -> String {
    format!(
        "// Tail-shaped recursion unwinds into a loop\nfunction {name}(n) {{\n  let acc = baseCase();\n  while (n > 0) {{\n    acc = step(acc, n);\n    n -= 1;\n  }}\n  return acc;\n}}"
    )
}
