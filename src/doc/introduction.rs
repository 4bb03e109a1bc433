/*!
# Introductory Tutorial for Integ

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type `$` by itself to exit.
<pre><code>&nbsp;  --------Integ 1.1---------
&nbsp;   Interactive  Interpreter
&nbsp;
&nbsp;  >>> █
</code></pre>

 Stop a running program with CTRL-C.

Integ has one datatype, the integer, and one place to keep integers: a row
of cells numbered from 0. There are no variable names. Everything is done
with operators, and every operator is a single character followed by its
operands, each in its own parentheses.

<pre><code>&nbsp;>>> ](72)](105)
&nbsp;Hi
</code></pre>

`]` prints the character whose code is its operand. Two statements were
typed one after the other with nothing between them. A statement ends as
soon as its operator has all of its operands; whatever follows is the
next statement. Spaces, tabs, and line breaks are ignored everywhere, so
a program can be laid out however you like.

## Cells

`}(address)(value)` writes and `{(address)` reads.

<pre><code>&nbsp;>>> }(0)(65)](Math.min)
</code></pre>

That was a mistake on purpose. Only `(`, `)`, operators, and integers may
appear in a program, so `Math.min` is an error. Try again.

<pre><code>&nbsp;>>> }(0)(65)]({(0))
&nbsp;A
</code></pre>

Operands can be whole expressions. Here `]` printed the contents of cell 0.
Writing to the first unused address allocates it. Writing further out
allocates every address in between as well, each set to 0. Memory never
has holes.

<pre><code>&nbsp;>>> }(3)(2)](+(48)(@()))
&nbsp;3
</code></pre>

`@()` answers the highest allocated address, or -1 if there is none. Its
operand is ignored, so it is usually left empty. An empty operand is 0,
which is also how `}(5)()` writes a zero.

`_(address)` frees every cell above `address`. Reading, or freeing, an
address that is not allocated is an error, and so is any negative address.

## Arithmetic

`+`, `-`, `*`, `/`, and `%` take two operands. Division truncates toward
zero, but `%` takes the sign of the divisor: `/(-7)(2)` is -3 and
`%(-7)(2)` is 1. Dividing by zero is an error.

`"()` is the time in whole seconds since 1970. `` `(1)(6) `` rolls a die;
the bounds may be given in either order.

## Input

`[()` waits for a single key, without waiting for ENTER and without
echoing it, and answers its character code.

## Decisions and loops

`?(test)(zero)(other)` runs `zero` when `test` is 0 and `other`
otherwise. Only one of the two ever runs.

`~(test)(body)` runs `body` for as long as `test` is 0. This prints the
digits 0 through 9 using cell 0 as a counter.

<pre><code>&nbsp;>>> }(0)(0)~(/({(0))(10))(](+(48)({(0)))}(0)(+({(0))(1)))
&nbsp;0123456789
</code></pre>

## Comments

Anything between `#.` and `.#` is removed before the program runs. A comment
at the very end of a program does not need the closing `.#`.

<pre><code>&nbsp;>>> #. say hi .# ](104)](105) #. and stop
&nbsp;hi
</code></pre>

## Errors

When a statement fails, everything it did before the failure stays done.
At the prompt you get the error and can carry on; cells keep their values.
A program run from a file stops at its first error.

*/
