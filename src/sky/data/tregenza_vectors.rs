// Tregenza sky, 145 patches in 12° bands.
// Patch centers band by band from the horizon, clockwise from north within a band,
// zenith cap last. x east, y north, z up.
[
    Vector3::new(0.0, 0.994521895368273, 0.104528463267653),
    Vector3::new(0.2067727288213, 0.972789205831713, 0.104528463267653),
    Vector3::new(0.404508497187474, 0.908540960039796, 0.104528463267653),
    Vector3::new(0.584565303179429, 0.804585114630916, 0.104528463267653),
    Vector3::new(0.739073800366903, 0.665465038884934, 0.104528463267653),
    Vector3::new(0.861281226008774, 0.497260947684137, 0.104528463267653),
    Vector3::new(0.945846529188203, 0.30732416694678, 0.104528463267653),
    Vector3::new(0.989073800366903, 0.10395584540888, 0.104528463267653),
    Vector3::new(0.989073800366903, -0.10395584540888, 0.104528463267653),
    Vector3::new(0.945846529188203, -0.30732416694678, 0.104528463267653),
    Vector3::new(0.861281226008774, -0.497260947684136, 0.104528463267653),
    Vector3::new(0.739073800366903, -0.665465038884934, 0.104528463267653),
    Vector3::new(0.584565303179429, -0.804585114630916, 0.104528463267653),
    Vector3::new(0.404508497187474, -0.908540960039796, 0.104528463267653),
    Vector3::new(0.2067727288213, -0.972789205831713, 0.104528463267653),
    Vector3::new(0.0, -0.994521895368273, 0.104528463267653),
    Vector3::new(-0.206772728821301, -0.972789205831713, 0.104528463267653),
    Vector3::new(-0.404508497187474, -0.908540960039796, 0.104528463267653),
    Vector3::new(-0.584565303179429, -0.804585114630917, 0.104528463267653),
    Vector3::new(-0.739073800366903, -0.665465038884934, 0.104528463267653),
    Vector3::new(-0.861281226008774, -0.497260947684137, 0.104528463267653),
    Vector3::new(-0.945846529188203, -0.30732416694678, 0.104528463267653),
    Vector3::new(-0.989073800366903, -0.10395584540888, 0.104528463267653),
    Vector3::new(-0.989073800366903, 0.103955845408879, 0.104528463267653),
    Vector3::new(-0.945846529188203, 0.30732416694678, 0.104528463267653),
    Vector3::new(-0.861281226008774, 0.497260947684137, 0.104528463267653),
    Vector3::new(-0.739073800366903, 0.665465038884933, 0.104528463267653),
    Vector3::new(-0.584565303179429, 0.804585114630916, 0.104528463267653),
    Vector3::new(-0.404508497187474, 0.908540960039796, 0.104528463267653),
    Vector3::new(-0.206772728821301, 0.972789205831713, 0.104528463267653),
    Vector3::new(0.0, 0.951056516295154, 0.309016994374947),
    Vector3::new(0.197735768366173, 0.930273649576356, 0.309016994374947),
    Vector3::new(0.386829534813256, 0.868833360422834, 0.309016994374947),
    Vector3::new(0.559016994374947, 0.769420884293813, 0.309016994374947),
    Vector3::new(0.7067727288213, 0.636381023430119, 0.309016994374947),
    Vector3::new(0.823639103546332, 0.475528258147577, 0.309016994374947),
    Vector3::new(0.904508497187474, 0.293892626146237, 0.309016994374947),
    Vector3::new(0.945846529188203, 0.09941247612902, 0.309016994374947),
    Vector3::new(0.945846529188203, -0.099412476129021, 0.309016994374947),
    Vector3::new(0.904508497187474, -0.293892626146236, 0.309016994374947),
    Vector3::new(0.823639103546332, -0.475528258147577, 0.309016994374947),
    Vector3::new(0.7067727288213, -0.636381023430119, 0.309016994374947),
    Vector3::new(0.559016994374948, -0.769420884293813, 0.309016994374947),
    Vector3::new(0.386829534813256, -0.868833360422834, 0.309016994374947),
    Vector3::new(0.197735768366173, -0.930273649576356, 0.309016994374947),
    Vector3::new(0.0, -0.951056516295154, 0.309016994374947),
    Vector3::new(-0.197735768366173, -0.930273649576356, 0.309016994374947),
    Vector3::new(-0.386829534813256, -0.868833360422834, 0.309016994374947),
    Vector3::new(-0.559016994374947, -0.769420884293814, 0.309016994374947),
    Vector3::new(-0.7067727288213, -0.636381023430119, 0.309016994374947),
    Vector3::new(-0.823639103546332, -0.475528258147577, 0.309016994374947),
    Vector3::new(-0.904508497187474, -0.293892626146237, 0.309016994374947),
    Vector3::new(-0.945846529188203, -0.09941247612902, 0.309016994374947),
    Vector3::new(-0.945846529188203, 0.09941247612902, 0.309016994374947),
    Vector3::new(-0.904508497187474, 0.293892626146236, 0.309016994374947),
    Vector3::new(-0.823639103546332, 0.475528258147577, 0.309016994374947),
    Vector3::new(-0.706772728821301, 0.636381023430119, 0.309016994374947),
    Vector3::new(-0.559016994374948, 0.769420884293813, 0.309016994374947),
    Vector3::new(-0.386829534813256, 0.868833360422834, 0.309016994374947),
    Vector3::new(-0.197735768366174, 0.930273649576356, 0.309016994374947),
    Vector3::new(0.0, 0.866025403784439, 0.5),
    Vector3::new(0.224143868042013, 0.836516303737808, 0.5),
    Vector3::new(0.433012701892219, 0.75, 0.5),
    Vector3::new(0.612372435695794, 0.612372435695795, 0.5),
    Vector3::new(0.75, 0.433012701892219, 0.5),
    Vector3::new(0.836516303737808, 0.224143868042013, 0.5),
    Vector3::new(0.866025403784439, 0.0, 0.5),
    Vector3::new(0.836516303737808, -0.224143868042013, 0.5),
    Vector3::new(0.75, -0.433012701892219, 0.5),
    Vector3::new(0.612372435695795, -0.612372435695794, 0.5),
    Vector3::new(0.433012701892219, -0.75, 0.5),
    Vector3::new(0.224143868042014, -0.836516303737808, 0.5),
    Vector3::new(0.0, -0.866025403784439, 0.5),
    Vector3::new(-0.224143868042013, -0.836516303737808, 0.5),
    Vector3::new(-0.433012701892219, -0.75, 0.5),
    Vector3::new(-0.612372435695794, -0.612372435695795, 0.5),
    Vector3::new(-0.75, -0.43301270189222, 0.5),
    Vector3::new(-0.836516303737808, -0.224143868042013, 0.5),
    Vector3::new(-0.866025403784439, 0.0, 0.5),
    Vector3::new(-0.836516303737808, 0.224143868042013, 0.5),
    Vector3::new(-0.75, 0.433012701892219, 0.5),
    Vector3::new(-0.612372435695795, 0.612372435695794, 0.5),
    Vector3::new(-0.43301270189222, 0.75, 0.5),
    Vector3::new(-0.224143868042013, 0.836516303737808, 0.5),
    Vector3::new(0.0, 0.743144825477394, 0.669130606358858),
    Vector3::new(0.192340034102939, 0.717822779601697, 0.669130606358858),
    Vector3::new(0.371572412738697, 0.643582297554377, 0.669130606358858),
    Vector3::new(0.525482745498759, 0.525482745498759, 0.669130606358858),
    Vector3::new(0.643582297554376, 0.371572412738697, 0.669130606358858),
    Vector3::new(0.717822779601697, 0.192340034102939, 0.669130606358858),
    Vector3::new(0.743144825477394, 0.0, 0.669130606358858),
    Vector3::new(0.717822779601697, -0.192340034102939, 0.669130606358858),
    Vector3::new(0.643582297554377, -0.371572412738697, 0.669130606358858),
    Vector3::new(0.525482745498759, -0.525482745498759, 0.669130606358858),
    Vector3::new(0.371572412738697, -0.643582297554377, 0.669130606358858),
    Vector3::new(0.192340034102939, -0.717822779601697, 0.669130606358858),
    Vector3::new(0.0, -0.743144825477394, 0.669130606358858),
    Vector3::new(-0.192340034102939, -0.717822779601697, 0.669130606358858),
    Vector3::new(-0.371572412738697, -0.643582297554376, 0.669130606358858),
    Vector3::new(-0.525482745498759, -0.525482745498759, 0.669130606358858),
    Vector3::new(-0.643582297554376, -0.371572412738697, 0.669130606358858),
    Vector3::new(-0.717822779601697, -0.192340034102939, 0.669130606358858),
    Vector3::new(-0.743144825477394, 0.0, 0.669130606358858),
    Vector3::new(-0.717822779601698, 0.192340034102938, 0.669130606358858),
    Vector3::new(-0.643582297554376, 0.371572412738697, 0.669130606358858),
    Vector3::new(-0.525482745498759, 0.525482745498759, 0.669130606358858),
    Vector3::new(-0.371572412738697, 0.643582297554376, 0.669130606358858),
    Vector3::new(-0.192340034102939, 0.717822779601697, 0.669130606358858),
    Vector3::new(0.0, 0.587785252292473, 0.809016994374947),
    Vector3::new(0.201034396233786, 0.55233746418602, 0.809016994374947),
    Vector3::new(0.377821077330078, 0.450269626265936, 0.809016994374947),
    Vector3::new(0.509036960455127, 0.293892626146237, 0.809016994374947),
    Vector3::new(0.578855473563864, 0.102067837920085, 0.809016994374947),
    Vector3::new(0.578855473563864, -0.102067837920085, 0.809016994374947),
    Vector3::new(0.509036960455127, -0.293892626146236, 0.809016994374947),
    Vector3::new(0.377821077330078, -0.450269626265936, 0.809016994374947),
    Vector3::new(0.201034396233786, -0.55233746418602, 0.809016994374947),
    Vector3::new(0.0, -0.587785252292473, 0.809016994374947),
    Vector3::new(-0.201034396233786, -0.55233746418602, 0.809016994374947),
    Vector3::new(-0.377821077330078, -0.450269626265936, 0.809016994374947),
    Vector3::new(-0.509036960455127, -0.293892626146237, 0.809016994374947),
    Vector3::new(-0.578855473563864, -0.102067837920085, 0.809016994374947),
    Vector3::new(-0.578855473563864, 0.102067837920085, 0.809016994374947),
    Vector3::new(-0.509036960455127, 0.293892626146237, 0.809016994374947),
    Vector3::new(-0.377821077330078, 0.450269626265935, 0.809016994374947),
    Vector3::new(-0.201034396233786, 0.55233746418602, 0.809016994374947),
    Vector3::new(0.0, 0.4067366430758, 0.913545457642601),
    Vector3::new(0.2033683215379, 0.352244265553647, 0.913545457642601),
    Vector3::new(0.352244265553647, 0.2033683215379, 0.913545457642601),
    Vector3::new(0.4067366430758, 0.0, 0.913545457642601),
    Vector3::new(0.352244265553647, -0.2033683215379, 0.913545457642601),
    Vector3::new(0.2033683215379, -0.352244265553647, 0.913545457642601),
    Vector3::new(0.0, -0.4067366430758, 0.913545457642601),
    Vector3::new(-0.2033683215379, -0.352244265553647, 0.913545457642601),
    Vector3::new(-0.352244265553647, -0.2033683215379, 0.913545457642601),
    Vector3::new(-0.4067366430758, 0.0, 0.913545457642601),
    Vector3::new(-0.352244265553647, 0.2033683215379, 0.913545457642601),
    Vector3::new(-0.2033683215379, 0.352244265553647, 0.913545457642601),
    Vector3::new(0.0, 0.207911690817759, 0.978147600733806),
    Vector3::new(0.180056805991955, 0.10395584540888, 0.978147600733806),
    Vector3::new(0.180056805991956, -0.10395584540888, 0.978147600733806),
    Vector3::new(0.0, -0.207911690817759, 0.978147600733806),
    Vector3::new(-0.180056805991955, -0.10395584540888, 0.978147600733806),
    Vector3::new(-0.180056805991955, 0.10395584540888, 0.978147600733806),
    Vector3::new(0.0, 0.0, 1.0),
]
